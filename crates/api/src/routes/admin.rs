use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Admin session routes mounted at `/api/admin`.
///
/// ```text
/// POST /auth   -> login (public)
/// GET  /me     -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", post(auth::login))
        .route("/me", get(auth::me))
}
