//! File-backed store persisting entries as a JSON object

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dashmap::DashMap;
use tracing::{debug, info, warn};

use super::store::{KeyValueStore, StorageError};

/// Store whose entries survive process restarts.
///
/// Reads are served from memory. Every mutation rewrites the whole file through
/// a temporary file and a rename, so a crash never leaves a half-written store.
pub struct FileStore {
    path: PathBuf,
    entries: DashMap<String, String>,
    /// Serializes flushes so concurrent writers cannot interleave renames
    flush_lock: Mutex<()>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file starts an empty store. An unreadable or malformed file is
    /// logged and treated as empty; it is replaced on the next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
            info!("Created storage directory: {:?}", parent);
        }

        let mut entries = DashMap::new();
        match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, String>>(&bytes) {
                Ok(map) => {
                    debug!("Loaded {} storage entries from {:?}", map.len(), path);
                    entries.extend(map);
                }
                Err(e) => {
                    warn!("Ignoring malformed storage file {:?}: {}", path, e);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Storage file {:?} does not exist yet", path);
            }
            Err(e) => {
                warn!("Failed to read storage file {:?}: {}", path, e);
            }
        }

        Ok(Self {
            path,
            entries,
            flush_lock: Mutex::new(()),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let _guard = self
            .flush_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("storage flush lock poisoned".to_string()))?;

        let snapshot: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, bytes)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }
}
