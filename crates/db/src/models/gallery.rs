//! Gallery image entity model and DTOs.

use schoolsite_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `gallery_images` table.
///
/// `src` is either a site-relative URL (`/images/kids.jpg`) or an inline
/// `data:` URI produced by the upload endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub id: DbId,
    pub title: String,
    pub category: Option<String>,
    pub src: String,
    pub alt: Option<String>,
    pub upload_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gallery image, from JSON or from an upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGalleryImage {
    pub title: Option<String>,
    pub category: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// DTO for `PUT /api/gallery`: a full-row replacement keyed by `id`.
///
/// `upload_date` is not replaceable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGalleryImage {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
}
