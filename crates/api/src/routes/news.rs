use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// Routes mounted at `/api/news`; same shape as the events routes.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(news::list)
            .post(news::create)
            .put(news::update)
            .delete(news::delete),
    )
}
