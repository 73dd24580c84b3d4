use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use schoolsite_core::image::MAX_UPLOAD_BYTES;

use crate::handlers::upload;
use crate::state::AppState;

/// Room for the multipart boundaries and text fields around the file.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Upload routes mounted at `/api/upload`.
///
/// ```text
/// POST /gallery   -> upload_gallery_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gallery", post(upload::upload_gallery_image))
        .layer(DefaultBodyLimit::max(
            MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
}
