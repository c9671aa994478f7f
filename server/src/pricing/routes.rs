//! HTTP route handlers for pricing API

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use super::table::{PRICING_TABLE, PricingEntry, PricingError, find_entry};

/// Error response for pricing API
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<PricingError> for PricingErrorResponse {
    fn from(e: PricingError) -> Self {
        let code = match &e {
            PricingError::NotFound(_) => "not_found",
        };
        Self {
            error: e.to_string(),
            code: code.to_string(),
        }
    }
}

impl IntoResponse for PricingErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// GET /api/pricing - The full pricing table
pub async fn list_pricing() -> Json<&'static [PricingEntry]> {
    Json(PRICING_TABLE.as_slice())
}

/// GET /api/pricing/:code - A single room type
pub async fn get_pricing(
    Path(code): Path<String>,
) -> Result<Json<&'static PricingEntry>, PricingErrorResponse> {
    Ok(Json(find_entry(&code)?))
}

/// Build pricing API routes
pub fn pricing_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/pricing", get(list_pricing))
        .route("/pricing/:code", get(get_pricing))
}
