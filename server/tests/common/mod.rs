//! Common Test Utilities for Integration Tests
//!
//! Shared helpers used across integration test modules.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::{TimeZone, Utc};
use roomdesk_server::{
    AppState, KeyValueStore, MemoryStore, Room, RoomError, RoomService, RoomStatus,
    SessionContext, app_router,
};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Create a test application router over the given store
pub async fn create_test_app_with_store(store: Arc<dyn KeyValueStore>) -> (Router, AppState) {
    let session = Arc::new(SessionContext::open(store).await);
    let app_state = AppState::new(session, Arc::new(MockRoomService::new()));
    (app_router(app_state.clone()), app_state)
}

/// Create a test application router with a fresh in-memory store
pub async fn create_test_app() -> (Router, AppState) {
    create_test_app_with_store(Arc::new(MemoryStore::new())).await
}

/// A unique scratch directory under the system temp dir
pub fn temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{}-{}", prefix, Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

/// Create a test room with standard values
pub fn create_test_room(code: &str, status: RoomStatus, price: u64) -> Room {
    let created = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    Room {
        id: Uuid::new_v4(),
        code: code.to_string(),
        title: format!("Room {}", code),
        floor: "Floor 2".to_string(),
        status,
        price,
        area: 24.0,
        capacity: 2,
        amenities: vec!["wifi".to_string()],
        images: vec![],
        created_at: created,
        updated_at: created,
    }
}

/// Mock room service for testing listing endpoints
pub struct MockRoomService {
    rooms: Vec<Room>,
}

impl MockRoomService {
    pub fn new() -> Self {
        Self {
            rooms: vec![
                create_test_room("C301", RoomStatus::Available, 500),
                create_test_room("C302", RoomStatus::Available, 520),
                create_test_room("C303", RoomStatus::Occupied, 610),
            ],
        }
    }
}

#[async_trait]
impl RoomService for MockRoomService {
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomError> {
        Ok(self.rooms.clone())
    }

    async fn get_room(&self, id: &str) -> Result<Room, RoomError> {
        self.rooms
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(id) || r.id.to_string() == id)
            .cloned()
            .ok_or_else(|| RoomError::NotFound(id.to_string()))
    }
}
