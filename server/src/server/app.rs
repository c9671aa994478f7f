use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::constants::{ConstantsResponse, DEFAULT_API_BASE_URL};
use crate::pricing::pricing_routes;
use crate::room::{RoomAppState, RoomService, room_routes};
use crate::session::{SessionContext, session_routes, session_scope};
use crate::ui::ui_routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionContext>,
    pub room_service: Arc<dyn RoomService>,
    pub api_base_url: Arc<str>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(session: Arc<SessionContext>, room_service: Arc<dyn RoomService>) -> Self {
        Self {
            session,
            room_service,
            api_base_url: Arc::from(DEFAULT_API_BASE_URL),
            started_at: Instant::now(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.api_base_url = Arc::from(url.as_ref());
        self
    }

    /// Room counts and session flag for the metrics endpoints
    pub async fn get_stats(&self) -> (usize, bool) {
        let rooms = self
            .room_service
            .list_rooms()
            .await
            .map(|rooms| rooms.len())
            .unwrap_or(0);
        (rooms, self.session.is_authenticated().await)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub room_catalog: String,
    pub session_restored: bool,
    pub uptime_seconds: u64,
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog_ready = state.room_service.list_rooms().await.is_ok();

    let (status, http_status) = if catalog_ready {
        ("healthy", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            room_catalog: (if catalog_ready { "ready" } else { "unavailable" }).to_string(),
            session_restored: state.session.is_settled().await,
            uptime_seconds: state.started_at.elapsed().as_secs(),
        }),
    )
}

/// GET /api/constants - Base API address and literal sets
async fn get_constants(State(state): State<AppState>) -> Json<ConstantsResponse> {
    Json(ConstantsResponse::new(state.api_base_url.as_ref()))
}

/// Build the application router: pages, JSON API and health check.
///
/// Every route runs inside the session scope of `state.session`.
pub fn app_router(state: AppState) -> Router {
    let room_api = room_routes(RoomAppState {
        room_service: state.room_service.clone(),
    });

    let api: Router = Router::new()
        .merge(session_routes::<AppState>())
        .merge(pricing_routes::<AppState>())
        .route("/constants", get(get_constants))
        .with_state(state.clone())
        .merge(room_api);

    Router::new()
        .route("/health", get(health))
        .merge(ui_routes())
        .with_state(state.clone())
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            state.session.clone(),
            session_scope,
        ))
}
