//! News article entity model and DTOs.

use schoolsite_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `news_articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsArticle {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub publish_date: Option<Date>,
    pub status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a news article.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNewsArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Defaults to today when omitted.
    pub publish_date: Option<Date>,
    /// Defaults to `draft` when omitted.
    pub status: Option<String>,
}

/// DTO for `PUT /api/news`: a full-row replacement keyed by `id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNewsArticle {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub publish_date: Option<Date>,
    pub status: Option<String>,
}
