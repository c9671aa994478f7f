//! RoomDesk Server Library
//!
//! This module exports the server components for use in integration tests
//! and external tooling.

pub mod config;
pub mod constants;
pub mod pricing;
pub mod room;
pub mod server;
pub mod session;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use room::{LocalRoomService, Room, RoomError, RoomService, RoomStatus};
pub use server::{AppState, app_router};
pub use session::{SessionContext, SessionSnapshot};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
