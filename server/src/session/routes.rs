//! HTTP route handlers for the session API

use axum::{Json, Router, routing::{get, post}};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scope::current;
use super::state::SessionSnapshot;

/// Body for POST /api/session/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// GET /api/session - Current session snapshot
pub async fn get_session() -> Json<SessionSnapshot> {
    Json(current().snapshot().await)
}

/// POST /api/session/login - Log in as the given owner
pub async fn login(Json(request): Json<LoginRequest>) -> Json<SessionSnapshot> {
    debug!("Login requested for {:?}", request.name);
    let snapshot = current()
        .login(request.name, request.role.as_deref())
        .await;
    Json(snapshot)
}

/// POST /api/session/logout - Clear the session
pub async fn logout() -> Json<SessionSnapshot> {
    Json(current().logout().await)
}

/// Build session API routes.
///
/// The handlers read the session from the enclosing scope, so the router these
/// routes end up in must be wrapped with `session_scope`.
pub fn session_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/session", get(get_session))
        .route("/session/login", post(login))
        .route("/session/logout", post(logout))
}
