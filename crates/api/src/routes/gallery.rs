use axum::routing::get;
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/api/gallery`. Binary uploads are under `/api/upload`.
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
        get(gallery::list)
            .post(gallery::create)
            .put(gallery::update)
            .delete(gallery::delete),
    )
}
