//! Admin user entity model and DTOs.

use schoolsite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `admin_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AdminProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin representation for API responses (no password hash).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminProfile {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
}

impl From<&AdminUser> for AdminProfile {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// DTO for provisioning an admin. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateAdminUser {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
}
