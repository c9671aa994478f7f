//! RoomService trait definition

use async_trait::async_trait;

use super::types::{Room, RoomError};

/// Trait for room sources
#[async_trait]
pub trait RoomService: Send + Sync {
    /// List all rooms, ordered by code
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomError>;

    /// Get a room by UUID or by code (case-insensitive)
    async fn get_room(&self, id: &str) -> Result<Room, RoomError>;

    /// Check if a room exists
    async fn room_exists(&self, id: &str) -> bool {
        self.get_room(id).await.is_ok()
    }
}
