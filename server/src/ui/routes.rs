//! UI routes - server-rendered HTML pages

use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{debug, error, warn};

use super::pages;
use crate::pricing::PRICING_TABLE;
use crate::room::{RoomError, RoomListItem, RoomSummary};
use crate::server::AppState;
use crate::session::current_session;

/// Fields of the header login form
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Create router for UI pages
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/rooms/:id", get(room_detail))
        .route("/pricing", get(pricing))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let session = current_session().snapshot().await;

    let html = match state.room_service.list_rooms().await {
        Ok(rooms) => {
            let summary = RoomSummary::from_rooms(&rooms);
            let items: Vec<RoomListItem> = rooms.into_iter().map(RoomListItem::from).collect();
            pages::rooms_page(&session, &state.api_base_url, Ok(items.as_slice()), &summary)
        }
        Err(e) => {
            error!("Failed to list rooms for index page: {}", e);
            let message = e.to_string();
            pages::rooms_page(
                &session,
                &state.api_base_url,
                Err(message.as_str()),
                &RoomSummary::default(),
            )
        }
    };

    Html(html)
}

async fn room_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let session = current_session().snapshot().await;

    match state.room_service.get_room(&id).await {
        Ok(room) => Html(pages::room_page(&session, &state.api_base_url, &room)).into_response(),
        Err(e) => {
            if !matches!(e, RoomError::NotFound(_)) {
                warn!("Failed to get room {} for detail page: {}", id, e);
            }
            (
                StatusCode::NOT_FOUND,
                Html(pages::room_not_found_page(&session, &state.api_base_url, &id)),
            )
                .into_response()
        }
    }
}

async fn pricing(State(state): State<AppState>) -> Html<String> {
    let session = current_session().snapshot().await;
    Html(pages::pricing_page(&session, &state.api_base_url, &PRICING_TABLE))
}

async fn login(Form(form): Form<LoginForm>) -> Redirect {
    // An empty role field means "use the default role"
    let role = form.role.as_deref().filter(|r| !r.trim().is_empty());
    debug!("Login form submitted for {:?}", form.name);
    current_session().login(form.name, role).await;
    Redirect::to("/")
}

async fn logout() -> Redirect {
    current_session().logout().await;
    Redirect::to("/")
}
