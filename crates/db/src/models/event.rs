//! Event entity model and DTOs.

use schoolsite_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub date: Date,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an event.
///
/// `title` and `date` are optional here on purpose: the `NOT NULL`
/// constraints on the table are what reject a missing value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEvent {
    pub title: Option<String>,
    pub date: Option<Date>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Defaults to `upcoming` when omitted.
    pub status: Option<String>,
}

/// DTO for `PUT /api/events`: a full-row replacement keyed by `id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub date: Option<Date>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}
