//! Request-scoped access to the session context
//!
//! The router installs the application's `SessionContext` into a task-local
//! scope for the duration of every request. Handlers and page renderers reach
//! it through `current()` instead of threading it through their signatures.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::context::SessionContext;

tokio::task_local! {
    static CURRENT_SESSION: Arc<SessionContext>;
}

/// Run `future` with `session` installed as the current session
pub async fn provide<F>(session: Arc<SessionContext>, future: F) -> F::Output
where
    F: Future,
{
    CURRENT_SESSION.scope(session, future).await
}

/// The session installed by the enclosing scope.
///
/// # Panics
///
/// Panics when called outside a scope established by [`provide`] or the
/// [`session_scope`] middleware. That is a wiring bug, not a runtime condition.
pub fn current() -> Arc<SessionContext> {
    match try_current() {
        Some(session) => session,
        None => panic!(
            "session accessed outside of a session scope; wrap the router with the session_scope middleware"
        ),
    }
}

/// The session installed by the enclosing scope, if any
pub fn try_current() -> Option<Arc<SessionContext>> {
    CURRENT_SESSION.try_with(Arc::clone).ok()
}

/// Middleware installing the session context around the inner service
pub async fn session_scope(
    State(session): State<Arc<SessionContext>>,
    request: Request,
    next: Next,
) -> Response {
    provide(session, next.run(request)).await
}
