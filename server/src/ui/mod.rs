//! Server-rendered pages and form posts

pub mod pages;
pub mod routes;

pub use routes::ui_routes;
