//! Repository for the `events` table.

use schoolsite_core::status;
use schoolsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, date, description, category, status, created_at, updated_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// List all events, soonest date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY date ASC, id ASC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Insert a new event, returning the created row.
    ///
    /// A missing `status` falls back to `upcoming`. A missing `title` or
    /// `date` fails with a `NOT NULL` violation from the database.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, date, description, category, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, $6))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.status)
            .bind(status::EVENT_UPCOMING)
            .fetch_one(pool)
            .await
    }

    /// Replace every editable column of an event.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = $2,
                date = $3,
                description = $4,
                category = $5,
                status = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
