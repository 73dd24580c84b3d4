//! Multipart gallery upload.
//!
//! The image bytes never touch disk: the accepted file is encoded as a
//! `data:` URI and stored in `gallery_images.src`.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use schoolsite_core::image::{self, UploadError};
use schoolsite_db::models::gallery::{CreateGalleryImage, GalleryImage};
use schoolsite_db::repositories::GalleryRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub image: GalleryImage,
}

/// A file part that passed format and size checks.
struct AcceptedFile {
    content_type: String,
    bytes: Vec<u8>,
}

/// POST /api/upload/gallery
///
/// Multipart fields: `image` (the file), `title`, `category`, `alt`.
/// Unknown fields are ignored.
pub async fn upload_gallery_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart = multipart?;
    let mut file: Option<AcceptedFile> = None;
    let mut input = CreateGalleryImage::default();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                image::check_format(&file_name, &content_type)?;

                let mut bytes = Vec::new();
                while let Some(chunk) = field
                    .chunk()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                {
                    image::check_size(bytes.len() + chunk.len())?;
                    bytes.extend_from_slice(&chunk);
                }

                file = Some(AcceptedFile {
                    content_type,
                    bytes,
                });
            }
            "title" | "category" | "alt" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                match name.as_str() {
                    "title" => input.title = Some(text),
                    "category" => input.category = Some(text),
                    _ => input.alt = Some(text),
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    let file = file.ok_or(UploadError::MissingFile)?;
    let size = file.bytes.len();
    input.src = Some(image::encode_data_uri(&file.content_type, &file.bytes));

    let stored = GalleryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        image_id = stored.id,
        size,
        content_type = %file.content_type,
        "Gallery image uploaded",
    );

    Ok(Json(UploadResponse {
        message: "Image uploaded successfully",
        image: stored,
    }))
}
