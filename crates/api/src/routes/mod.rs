pub mod admin;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod health;
pub mod news;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                  list, create, update, delete
/// /gallery                 list, create, update, delete
/// /upload/gallery          multipart image upload
/// /news                    list, create, update, delete
///
/// /admin/auth              login (public)
/// /admin/me                current admin (requires auth)
///
/// /contact                 submit (public), list (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/gallery", gallery::router())
        .nest("/upload", upload::router())
        .nest("/news", news::router())
        .nest("/admin", admin::router())
        .nest("/contact", contact::router())
}
