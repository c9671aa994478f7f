//! Application state and router assembly

mod app;

pub use app::{AppState, HealthResponse, app_router};
