//! Owner session module
//!
//! This module provides:
//! - `SessionContext`, the logged-in owner state mirrored to a `KeyValueStore`
//! - Scoped access to the context for request handlers (`scope`)
//! - JSON routes for reading the session and logging in or out

pub mod context;
pub mod routes;
pub mod scope;
pub mod state;

pub use context::{RestoreOutcome, SessionContext};
pub use routes::session_routes;
pub use scope::{current as current_session, session_scope, try_current as try_current_session};
pub use state::{DEFAULT_OWNER_ROLE, OwnerState, SessionSnapshot, keys};
