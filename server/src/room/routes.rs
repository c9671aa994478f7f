//! HTTP route handlers for room API

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::service::RoomService;
use super::types::{Room, RoomError, RoomListItem, RoomStatus, RoomSummary};

/// Application state containing the room service
#[derive(Clone)]
pub struct RoomAppState {
    pub room_service: Arc<dyn RoomService>,
}

/// Error response for room API
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<RoomError> for RoomErrorResponse {
    fn from(e: RoomError) -> Self {
        let code = match &e {
            RoomError::NotFound(_) => "not_found",
            RoomError::InvalidStatus(_) => "invalid_status",
            RoomError::ParseError(_) => "parse_error",
            RoomError::IoError(_) => "io_error",
        };
        Self {
            error: e.to_string(),
            code: code.to_string(),
        }
    }
}

impl IntoResponse for RoomErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "invalid_status" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Query parameters for room listing
#[derive(Debug, Deserialize)]
pub struct RoomListParams {
    pub status: Option<String>,
}

/// GET /api/rooms - List rooms, optionally filtered by status
pub async fn list_rooms(
    State(state): State<RoomAppState>,
    Query(params): Query<RoomListParams>,
) -> Result<Json<Vec<RoomListItem>>, RoomErrorResponse> {
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<RoomStatus>)
        .transpose()?;

    let rooms = state.room_service.list_rooms().await.map_err(|e| {
        tracing::error!("Failed to list rooms: {}", e);
        RoomErrorResponse::from(e)
    })?;

    Ok(Json(
        rooms
            .into_iter()
            .filter(|room| status.is_none_or(|s| room.status == s))
            .map(RoomListItem::from)
            .collect(),
    ))
}

/// GET /api/rooms/summary - Room counts by status
pub async fn get_summary(
    State(state): State<RoomAppState>,
) -> Result<Json<RoomSummary>, RoomErrorResponse> {
    let rooms = state.room_service.list_rooms().await.map_err(|e| {
        tracing::error!("Failed to list rooms for summary: {}", e);
        RoomErrorResponse::from(e)
    })?;

    Ok(Json(RoomSummary::from_rooms(&rooms)))
}

/// GET /api/room/:id - Get a room by UUID or code
pub async fn get_room(
    State(state): State<RoomAppState>,
    Path(id): Path<String>,
) -> Result<Json<Room>, RoomErrorResponse> {
    let room = state.room_service.get_room(&id).await.map_err(|e| {
        match &e {
            RoomError::NotFound(_) => tracing::debug!("Room not found: {}", id),
            _ => tracing::warn!("Failed to get room {}: {}", id, e),
        }
        RoomErrorResponse::from(e)
    })?;

    Ok(Json(room))
}

/// Build room API routes
pub fn room_routes(state: RoomAppState) -> Router {
    Router::new()
        .route("/rooms", get(list_rooms))
        .route("/rooms/summary", get(get_summary))
        .route("/room/:id", get(get_room))
        .with_state(state)
}
