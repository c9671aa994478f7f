use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use roomdesk_server::config::{Config, StorageBackend};
use roomdesk_server::{
    AppState, FileStore, KeyValueStore, LocalRoomService, MemoryStore, SessionContext, app_router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Ensure the parent directory of a data file exists, creating it if necessary.
fn ensure_parent_directory(path: &Path, name: &str) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)?;
            info!("Created {} directory: {:?}", name, parent);
            Ok(())
        }
        Some(parent) if parent.exists() && !parent.is_dir() => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} path {:?} exists but is not a directory", name, parent),
        )),
        _ => Ok(()),
    }
}

#[derive(Serialize)]
struct MetricsResponse {
    /// Server uptime in seconds
    uptime_seconds: u64,
    /// Server version
    version: &'static str,
    /// Number of rooms in the catalog
    rooms: usize,
    /// Whether an owner is logged in
    owner_authenticated: bool,
}

async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let (rooms, owner_authenticated) = state.get_stats().await;

    Json(MetricsResponse {
        uptime_seconds: state.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION"),
        rooms,
        owner_authenticated,
    })
}

/// Prometheus metrics handle for exposing metrics in Prometheus format
static PROMETHEUS_HANDLE: std::sync::OnceLock<PrometheusHandle> = std::sync::OnceLock::new();

/// Endpoint to expose metrics in Prometheus format
async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

/// Update gauge metrics (called periodically)
async fn update_gauge_metrics(state: &AppState) {
    let (rooms, _) = state.get_stats().await;

    metrics::gauge!("roomdesk_rooms_total").set(rooms as f64);
    metrics::gauge!("roomdesk_uptime_seconds").set(state.started_at.elapsed().as_secs() as f64);
}

fn open_store(config: &Config) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => {
            ensure_parent_directory(&config.storage.path, "storage")?;
            let store = FileStore::open(&config.storage.path)?;
            info!("Using file storage at {:?}", store.path());
            Arc::new(store)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage - the owner session will not survive restarts");
            Arc::new(MemoryStore::new())
        }
    };
    Ok(store)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize Prometheus metrics recorder (must be done before any metrics are recorded)
    let prometheus_handle = PrometheusBuilder::new().install_recorder()?;
    PROMETHEUS_HANDLE.set(prometheus_handle).ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomdesk=debug,roomdesk_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = Config::from_env();
    info!(
        "Loaded configuration: host={}, port={}",
        config.host, config.port
    );
    info!("API base URL: {}", config.api_base_url);

    if let Err(e) = ensure_parent_directory(&config.rooms.rooms_file, "rooms data") {
        warn!(
            "Failed to prepare rooms data directory for {:?}: {}",
            config.rooms.rooms_file, e
        );
    }

    // Restore the owner session before accepting requests
    let store = open_store(&config)?;
    let session = Arc::new(SessionContext::new(store));
    let outcome = session.restore().await;
    info!("Session restore: {:?}", outcome);

    let room_service = Arc::new(LocalRoomService::new(&config.rooms));

    let app_state = AppState::new(session, room_service).with_api_base_url(&config.api_base_url);

    // Periodic update of gauge metrics (every 5 seconds)
    let metrics_state = app_state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(5));
        loop {
            interval.tick().await;
            update_gauge_metrics(&metrics_state).await;
        }
    });

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = app_router(app_state.clone())
        .merge(
            Router::new()
                .route("/metrics", get(metrics))
                .route("/metrics/prometheus", get(prometheus_metrics))
                .with_state::<()>(app_state),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Add static file serving if configured
    let app = if let Some(ref static_dir) = config.static_files.dir {
        if static_dir.exists() {
            info!("Serving static files from: {:?}", static_dir);

            let index_path = static_dir.join("index.html");
            let serve_dir =
                ServeDir::new(static_dir).not_found_service(ServeFile::new(&index_path));

            let static_service = ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .service(serve_dir);

            app.fallback_service(static_service)
        } else {
            warn!(
                "Static files directory not found: {:?} - static file serving disabled",
                static_dir
            );
            app
        }
    } else {
        info!("Static file serving disabled (STATIC_FILES_DIR not set)");
        app
    };

    // Start the server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("RoomDesk server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
