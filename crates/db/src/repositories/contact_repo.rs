//! Repository for the `contact_messages` table.

use schoolsite_core::contact::NewContactMessage;
use schoolsite_core::status;
use sqlx::PgPool;

use crate::models::contact::ContactMessage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, subject, message, status, created_at";

/// Provides persistence for contact form submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Store a validated submission as `unread`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, phone, subject, message, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(status::CONTACT_UNREAD)
            .fetch_one(pool)
            .await
    }

    /// List all messages, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }
}
