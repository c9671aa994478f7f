//! Test Utilities Module
//!
//! Provides helper functions, fixtures, and utilities for testing the RoomDesk server.
//! This module is only compiled when running tests.

#![cfg(test)]

use crate::room::{Room, RoomError, RoomService, RoomStatus};
use crate::server::{AppState, app_router};
use crate::session::SessionContext;
use crate::storage::MemoryStore;
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::util::ServiceExt;
use uuid::Uuid;

// ============================================================================
// Test Context
// ============================================================================

/// Test context that holds all test fixtures and state
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub app_state: AppState,
    pub router: Router,
}

impl TestContext {
    /// Create a new test context with an empty store and the fixture rooms
    pub async fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new())).await
    }

    /// Create a test context over an existing store, restoring from it
    pub async fn with_store(store: Arc<MemoryStore>) -> Self {
        Self::build(store, FixtureRoomService::new()).await
    }

    /// Create a test context serving `rooms` instead of the fixture rooms
    pub async fn with_rooms(rooms: Vec<Room>) -> Self {
        Self::build(Arc::new(MemoryStore::new()), FixtureRoomService { rooms }).await
    }

    async fn build(store: Arc<MemoryStore>, room_service: FixtureRoomService) -> Self {
        let session = Arc::new(SessionContext::open(store.clone()).await);
        let app_state = AppState::new(session, Arc::new(room_service))
            .with_api_base_url("http://test.local/api");
        let router = app_router(app_state.clone());
        Self {
            store,
            app_state,
            router,
        }
    }

    /// Get a reference to the session context
    pub fn session(&self) -> &Arc<SessionContext> {
        &self.app_state.session
    }

    /// Make an HTTP request to the test router
    pub async fn request(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request")
    }

    /// Make a GET request and parse JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, uri: &str) -> (StatusCode, Option<T>) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self.request(request).await;
        let status = response.status();
        let body = read_body(response).await;

        let json: Option<T> = serde_json::from_slice(&body).ok();
        (status, json)
    }

    /// Make a POST request with JSON body and parse JSON response
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        uri: &str,
        body: impl serde::Serialize,
    ) -> (StatusCode, Option<T>) {
        let body_bytes = serde_json::to_vec(&body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body_bytes))
            .expect("Failed to build request");

        let response = self.request(request).await;
        let status = response.status();
        let body = read_body(response).await;

        let json: Option<T> = serde_json::from_slice(&body).ok();
        (status, json)
    }

    /// Make a GET request and return the body as text
    pub async fn get_html(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self.request(request).await;
        let status = response.status();
        let body = read_body(response).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    /// Submit a url-encoded form
    pub async fn post_form(&self, uri: &str, form: &str) -> axum::response::Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("Failed to build request");

        self.request(request).await
    }
}

async fn read_body(response: axum::response::Response) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
}

// ============================================================================
// Fixture Rooms
// ============================================================================

/// Room service serving a fixed set of rooms
pub struct FixtureRoomService {
    rooms: Vec<Room>,
}

impl FixtureRoomService {
    pub fn new() -> Self {
        Self {
            rooms: vec![
                create_test_room("A101", RoomStatus::Available),
                create_test_room("A102", RoomStatus::Occupied),
                create_test_room("B201", RoomStatus::Maintenance),
            ],
        }
    }
}

#[async_trait]
impl RoomService for FixtureRoomService {
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomError> {
        Ok(self.rooms.clone())
    }

    async fn get_room(&self, id: &str) -> Result<Room, RoomError> {
        self.rooms
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(id) || r.id.to_string() == id)
            .cloned()
            .ok_or_else(|| RoomError::NotFound(id.to_string()))
    }
}

/// Create a test room with standard values
pub fn create_test_room(code: &str, status: RoomStatus) -> Room {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    Room {
        id: Uuid::new_v4(),
        code: code.to_string(),
        title: format!("Test room {}", code),
        floor: "Floor 1".to_string(),
        status,
        price: 450,
        area: 20.0,
        capacity: 2,
        amenities: vec!["wifi".to_string(), "desk".to_string()],
        images: vec![format!("/img/{}.jpg", code.to_lowercase())],
        created_at: created,
        updated_at: created,
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Initialize test logging with detailed output
pub fn init_test_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomdesk_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomListItem;
    use crate::session::{SessionSnapshot, keys};
    use crate::storage::KeyValueStore;

    #[tokio::test]
    async fn test_health_endpoint() {
        let ctx = TestContext::new().await;
        let (status, json) = ctx.get_json::<serde_json::Value>("/health").await;
        assert_eq!(status, StatusCode::OK);
        let json = json.unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["session_restored"], true);
    }

    #[tokio::test]
    async fn test_session_api_login_logout() {
        init_test_logging();
        let ctx = TestContext::new().await;

        let (status, snapshot) = ctx.get_json::<SessionSnapshot>("/api/session").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(snapshot.unwrap(), SessionSnapshot::unauthenticated());

        let (status, snapshot) = ctx
            .post_json::<SessionSnapshot>(
                "/api/session/login",
                serde_json::json!({ "name": "Alice", "role": "manager" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let snapshot = snapshot.unwrap();
        assert_eq!(snapshot.owner_name.as_deref(), Some("Alice"));
        assert_eq!(snapshot.owner_role.as_deref(), Some("manager"));
        assert_eq!(ctx.store.get(keys::OWNER_NAME).unwrap().as_deref(), Some("Alice"));

        let (status, snapshot) = ctx
            .post_json::<SessionSnapshot>("/api/session/logout", serde_json::json!({}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(snapshot.unwrap(), SessionSnapshot::unauthenticated());
        assert!(ctx.store.is_empty());
    }

    #[tokio::test]
    async fn test_login_api_defaults_role() {
        let ctx = TestContext::new().await;
        let (_, snapshot) = ctx
            .post_json::<SessionSnapshot>("/api/session/login", serde_json::json!({ "name": "Bob" }))
            .await;
        assert_eq!(snapshot.unwrap().owner_role.as_deref(), Some("owner"));
        assert_eq!(ctx.store.get(keys::OWNER_ROLE).unwrap().as_deref(), Some("owner"));
    }

    #[tokio::test]
    async fn test_login_form_redirects_and_renders_owner() {
        let ctx = TestContext::new().await;

        let response = ctx.post_form("/login", "name=Carol&role=").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            ctx.session().snapshot().await.owner_role.as_deref(),
            Some("owner")
        );

        let (status, html) = ctx.get_html("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Welcome back, Carol."));
        assert!(html.contains(r#"action="/logout""#));

        let response = ctx.post_form("/logout", "").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let (_, html) = ctx.get_html("/").await;
        assert!(html.contains(r#"action="/login""#));
    }

    #[tokio::test]
    async fn test_index_lists_fixture_rooms() {
        let ctx = TestContext::new().await;
        let (status, html) = ctx.get_html("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("3 rooms"));
        let a101 = ctx.app_state.room_service.get_room("A101").await.unwrap();
        assert!(html.contains(&format!(r#"href="/rooms/{}""#, a101.id)));
        assert!(html.contains(r#"data-api-base="http://test.local/api""#));
    }

    #[tokio::test]
    async fn test_listing_links_resolve_for_awkward_codes() {
        let room = create_test_room("A/1 #2", RoomStatus::Available);
        let ctx = TestContext::with_rooms(vec![room.clone()]).await;

        let (_, html) = ctx.get_html("/").await;
        let link = format!("/rooms/{}", room.id);
        assert!(html.contains(&format!(r#"href="{}""#, link)));
        assert!(!html.contains(r#"href="/rooms/A/1"#));

        let (status, html) = ctx.get_html(&link).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Test room A/1 #2"));
    }

    #[tokio::test]
    async fn test_room_detail_page() {
        let ctx = TestContext::new().await;

        let (status, html) = ctx.get_html("/rooms/a102").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Test room A102"));

        let (status, html) = ctx.get_html("/rooms/Z999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("No room matches"));
    }

    #[tokio::test]
    async fn test_room_api_status_filter() {
        let ctx = TestContext::new().await;

        let (status, rooms) = ctx
            .get_json::<Vec<RoomListItem>>("/api/rooms?status=available")
            .await;
        assert_eq!(status, StatusCode::OK);
        let rooms = rooms.unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].code, "A101");

        let (status, _) = ctx
            .get_json::<serde_json::Value>("/api/rooms?status=vacant")
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_pricing_and_constants_api() {
        let ctx = TestContext::new().await;

        let (status, entries) = ctx.get_json::<Vec<serde_json::Value>>("/api/pricing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(entries.unwrap().len(), 7);

        let (status, _) = ctx.get_json::<serde_json::Value>("/api/pricing/castle").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, constants) = ctx.get_json::<serde_json::Value>("/api/constants").await;
        assert_eq!(status, StatusCode::OK);
        let constants = constants.unwrap();
        assert_eq!(constants["api_base_url"], "http://test.local/api");
        assert_eq!(constants["roles"], serde_json::json!(["OWNER", "MANAGER", "TENANT"]));
    }

    #[tokio::test]
    async fn test_restart_restores_owner_in_pages() {
        let store = Arc::new(MemoryStore::new());
        let first = TestContext::with_store(store.clone()).await;
        first.session().login("Alice", Some("manager")).await;
        drop(first);

        let second = TestContext::with_store(store).await;
        let (_, html) = second.get_html("/pricing").await;
        assert!(html.contains(r#"<span class="owner-name">Alice</span>"#));
        assert!(html.contains(r#"<span class="owner-role">manager</span>"#));
    }
}
