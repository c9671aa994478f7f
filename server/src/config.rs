//! Server configuration
//!
//! Configuration is loaded from environment variables on top of defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_API_BASE_URL;

/// Main server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base address of the JSON API, embedded in rendered pages
    pub api_base_url: String,

    /// Key-value storage configuration
    pub storage: StorageConfig,

    /// Room catalog configuration
    pub rooms: RoomConfig,

    /// Static file serving configuration
    pub static_files: StaticFilesConfig,
}

/// Which key-value store backs the owner session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON file on disk, survives restarts
    File,
    /// Process memory only
    Memory,
}

/// Storage-related configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Path of the JSON file used by the file backend
    pub path: PathBuf,
}

/// Room catalog configuration
#[derive(Debug, Clone)]
pub struct RoomConfig {
    /// JSON file holding an array of rooms
    pub rooms_file: PathBuf,
    /// How long a parsed catalog is served before the file is re-read
    pub list_cache_ttl: Duration,
}

/// Static file serving configuration
#[derive(Debug, Clone, Default)]
pub struct StaticFilesConfig {
    /// Directory of static assets, disabled when unset
    pub dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage: StorageConfig::default(),
            rooms: RoomConfig::default(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: PathBuf::from("data/storage.json"),
        }
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            rooms_file: PathBuf::from("data/rooms.json"),
            list_cache_ttl: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Server config
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT")
            && let Ok(p) = port.parse()
        {
            config.port = p;
        }
        if let Some(url) = lookup("API_BASE_URL")
            && !url.is_empty()
        {
            config.api_base_url = url;
        }

        // Storage config
        if let Some(val) = lookup("STORAGE_BACKEND") {
            match val.to_lowercase().as_str() {
                "file" => config.storage.backend = StorageBackend::File,
                "memory" => config.storage.backend = StorageBackend::Memory,
                _ => {}
            }
        }
        if let Some(path) = lookup("STORAGE_PATH")
            && !path.is_empty()
        {
            config.storage.path = PathBuf::from(path);
        }

        // Room config
        if let Some(path) = lookup("ROOMS_FILE")
            && !path.is_empty()
        {
            config.rooms.rooms_file = PathBuf::from(path);
        }
        if let Some(val) = lookup("ROOM_LIST_CACHE_TTL_SECS")
            && let Ok(secs) = val.parse::<u64>()
        {
            config.rooms.list_cache_ttl = Duration::from_secs(secs);
        }

        // Static files
        if let Some(dir) = lookup("STATIC_FILES_DIR")
            && !dir.is_empty()
        {
            config.static_files.dir = Some(PathBuf::from(dir));
        }

        config
    }
}
