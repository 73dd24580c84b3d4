//! Contact message entity model.
//!
//! The insert DTO is [`schoolsite_core::contact::NewContactMessage`], which
//! can only be built from a validated submission.

use schoolsite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: Option<String>,
    pub created_at: Timestamp,
}
