//! KeyValueStore trait definition

use thiserror::Error;

/// Errors that can occur when reading or writing the store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize storage: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A string-to-string store scoped to one application instance.
///
/// Implementations are shared between request handlers, so every method takes
/// `&self` and synchronizes internally. Removing an absent key is not an error.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` if present
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
