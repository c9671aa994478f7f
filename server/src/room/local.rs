//! Local room service reading a JSON data file

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use indexmap::IndexMap;
use metrics::counter;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::RoomConfig;

use super::service::RoomService;
use super::types::{Room, RoomError};

/// Parsed catalog keyed by lowercase room code, ordered by code
type Catalog = IndexMap<String, Room>;

/// Cached catalog with timestamp
struct CatalogCache {
    rooms: Arc<Catalog>,
    loaded_at: Instant,
}

/// Room service backed by a JSON array of rooms on disk.
///
/// The file is re-read at most once per `list_cache_ttl`, so edits to the data
/// file show up without a restart.
pub struct LocalRoomService {
    rooms_file: PathBuf,
    list_cache_ttl: Duration,
    cache: RwLock<Option<CatalogCache>>,
}

impl LocalRoomService {
    pub fn new(config: &RoomConfig) -> Self {
        info!(
            "Initialized local room service with data file: {:?}",
            config.rooms_file
        );

        Self {
            rooms_file: config.rooms_file.clone(),
            list_cache_ttl: config.list_cache_ttl,
            cache: RwLock::new(None),
        }
    }

    /// Drop the cached catalog so the next call re-reads the data file
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    async fn catalog(&self) -> Result<Arc<Catalog>, RoomError> {
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache
                && cached.loaded_at.elapsed() < self.list_cache_ttl
            {
                return Ok(Arc::clone(&cached.rooms));
            }
        }

        let mut cache = self.cache.write().await;
        // Another task may have reloaded while we waited for the write lock
        if let Some(ref cached) = *cache
            && cached.loaded_at.elapsed() < self.list_cache_ttl
        {
            return Ok(Arc::clone(&cached.rooms));
        }

        let rooms = Arc::new(self.load_catalog().await?);
        *cache = Some(CatalogCache {
            rooms: Arc::clone(&rooms),
            loaded_at: Instant::now(),
        });
        Ok(rooms)
    }

    async fn load_catalog(&self) -> Result<Catalog, RoomError> {
        counter!("roomdesk_room_catalog_reloads_total").increment(1);

        let bytes = match tokio::fs::read(&self.rooms_file).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Rooms file {:?} not found - serving an empty catalog",
                    self.rooms_file
                );
                return Ok(Catalog::new());
            }
            Err(e) => return Err(RoomError::IoError(e)),
        };

        let mut rooms: Vec<Room> = serde_json::from_slice(&bytes)?;
        rooms.sort_by(|a, b| a.code.cmp(&b.code));

        let mut catalog = Catalog::with_capacity(rooms.len());
        for room in rooms {
            let key = room.code.to_lowercase();
            if catalog.contains_key(&key) {
                warn!("Duplicate room code {} in {:?}, keeping first", room.code, self.rooms_file);
                continue;
            }
            debug!("Loaded room: {} ({})", room.code, room.id);
            catalog.insert(key, room);
        }

        info!("Loaded {} rooms from {:?}", catalog.len(), self.rooms_file);
        Ok(catalog)
    }
}

#[async_trait]
impl RoomService for LocalRoomService {
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomError> {
        let catalog = self.catalog().await?;
        Ok(catalog.values().cloned().collect())
    }

    async fn get_room(&self, id: &str) -> Result<Room, RoomError> {
        let catalog = self.catalog().await?;

        let found = match Uuid::parse_str(id) {
            Ok(uuid) => catalog.values().find(|room| room.id == uuid),
            Err(_) => catalog.get(&id.to_lowercase()),
        };

        found.cloned().ok_or_else(|| RoomError::NotFound(id.to_string()))
    }
}
