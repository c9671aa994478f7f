//! Room catalog module
//!
//! This module provides:
//! - `RoomService` trait for abstracting room sources
//! - `LocalRoomService` reading rooms from a JSON data file
//! - HTTP routes for listing and looking up rooms

mod local;
pub mod routes;
mod service;
mod types;

pub use local::LocalRoomService;
pub use routes::{RoomAppState, room_routes};
pub use service::RoomService;
pub use types::{Room, RoomError, RoomListItem, RoomStatus, RoomSummary};
