//! Room type pricing
//!
//! A fixed table of room types with their descriptions and monthly prices,
//! served as JSON and rendered on the pricing page.

pub mod routes;
mod table;

pub use routes::pricing_routes;
pub use table::{PRICING_TABLE, PricingEntry, PricingError, find_entry};
