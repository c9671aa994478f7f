//! Room-related types and error definitions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when working with rooms
#[derive(Debug, Error)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    NotFound(String),

    #[error("Invalid room status: {0}")]
    InvalidStatus(String),

    #[error("Failed to parse room data: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Occupancy state of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 3] = [Self::Available, Self::Occupied, Self::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }

    /// Human-readable label for pages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Under maintenance",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RoomError::InvalidStatus(s.to_string()))
    }
}

/// A rentable room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    /// Short code shown on doors and listings (e.g. "A101")
    pub code: String,
    pub title: String,
    /// Floor label (e.g. "Ground floor", "Floor 2")
    pub floor: String,
    pub status: RoomStatus,
    /// Monthly rent
    pub price: u64,
    /// Floor area in square meters
    pub area: f64,
    /// Maximum number of tenants
    pub capacity: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Image URLs, first one is the thumbnail
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Summary info for room listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomListItem {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub floor: String,
    pub status: RoomStatus,
    pub price: u64,
    pub area: f64,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl From<Room> for RoomListItem {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            code: r.code,
            title: r.title,
            floor: r.floor,
            status: r.status,
            price: r.price,
            area: r.area,
            capacity: r.capacity,
            thumbnail: r.images.into_iter().next(),
        }
    }
}

/// Room counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
}

impl RoomSummary {
    pub fn from_rooms<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        rooms
            .into_iter()
            .fold(Self::default(), |mut summary, room| {
                summary.total += 1;
                match room.status {
                    RoomStatus::Available => summary.available += 1,
                    RoomStatus::Occupied => summary.occupied += 1,
                    RoomStatus::Maintenance => summary.maintenance += 1,
                }
                summary
            })
    }
}
