//! Repository for the `gallery_images` table.

use schoolsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{CreateGalleryImage, GalleryImage, UpdateGalleryImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, src, alt, upload_date, created_at, updated_at";

/// Provides CRUD operations for gallery images.
pub struct GalleryRepo;

impl GalleryRepo {
    /// List all gallery images, most recently uploaded first.
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_images ORDER BY upload_date DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new gallery image, returning the created row.
    ///
    /// `upload_date` is set to today by the column default.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryImage,
    ) -> Result<GalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_images (title, category, src, alt)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.src)
            .bind(&input.alt)
            .fetch_one(pool)
            .await
    }

    /// Replace the editable columns of a gallery image.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryImage,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_images SET
                title = $2,
                category = $3,
                src = $4,
                alt = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.src)
            .bind(&input.alt)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gallery image. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
