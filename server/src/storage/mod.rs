//! Key-value storage module
//!
//! This module provides:
//! - `KeyValueStore` trait abstracting the persistent string store
//! - `MemoryStore` for tests and ephemeral deployments
//! - `FileStore` persisting entries to a JSON file so they survive restarts

mod file;
mod memory;
mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{KeyValueStore, StorageError};
