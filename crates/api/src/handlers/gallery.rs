//! Handlers for the `/gallery` resource.
//!
//! Images created here carry whatever `src` the client supplies. Binary
//! uploads go through [`super::upload`] instead.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use schoolsite_core::error::CoreError;
use schoolsite_db::models::gallery::{CreateGalleryImage, GalleryImage, UpdateGalleryImage};
use schoolsite_db::repositories::GalleryRepo;

use super::require_id;
use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, QueryParams};
use crate::query::IdParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/gallery
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryImage>>> {
    let images = GalleryRepo::list(&state.pool).await?;
    Ok(Json(images))
}

/// POST /api/gallery
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateGalleryImage>,
) -> AppResult<(StatusCode, Json<GalleryImage>)> {
    let image = GalleryRepo::create(&state.pool, &input).await?;

    tracing::info!(image_id = image.id, title = %image.title, "Gallery image created");

    Ok((StatusCode::CREATED, Json(image)))
}

/// PUT /api/gallery
pub async fn update(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpdateGalleryImage>,
) -> AppResult<Json<GalleryImage>> {
    let id = require_id(input.id)?;
    let image = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryImage",
            id,
        }))?;

    tracing::info!(image_id = id, "Gallery image updated");

    Ok(Json(image))
}

/// DELETE /api/gallery?id={id}
pub async fn delete(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<Json<MessageResponse>> {
    let id = require_id(params.id)?;
    if !GalleryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryImage",
            id,
        }));
    }

    tracing::info!(image_id = id, "Gallery image deleted");

    Ok(Json(MessageResponse::new("Gallery image deleted successfully")))
}
