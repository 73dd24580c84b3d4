use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/api/events`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// PUT    /            -> update (id in body)
/// DELETE /?id={id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(events::list)
            .post(events::create)
            .put(events::update)
            .delete(events::delete),
    )
}
