use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact form routes mounted at `/api/contact`.
///
/// ```text
/// POST /   -> submit (public)
/// GET  /   -> list (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(contact::list).post(contact::submit))
}
