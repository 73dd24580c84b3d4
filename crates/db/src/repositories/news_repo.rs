//! Repository for the `news_articles` table.

use schoolsite_core::status;
use schoolsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::news::{CreateNewsArticle, NewsArticle, UpdateNewsArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, publish_date, status, created_at, updated_at";

/// Provides CRUD operations for news articles.
pub struct NewsRepo;

impl NewsRepo {
    /// List all news articles, newest publish date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<NewsArticle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news_articles ORDER BY publish_date DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new article, returning the created row.
    ///
    /// A missing `publish_date` becomes today and a missing `status` becomes
    /// `draft`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNewsArticle,
    ) -> Result<NewsArticle, sqlx::Error> {
        let query = format!(
            "INSERT INTO news_articles (title, content, publish_date, status)
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE), COALESCE($4, $5))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.publish_date)
            .bind(&input.status)
            .bind(status::NEWS_DRAFT)
            .fetch_one(pool)
            .await
    }

    /// Replace every editable column of an article.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNewsArticle,
    ) -> Result<Option<NewsArticle>, sqlx::Error> {
        let query = format!(
            "UPDATE news_articles SET
                title = $2,
                content = $3,
                publish_date = $4,
                status = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.publish_date)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news_articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
