//! Repository for the `admin_users` table.
//!
//! There is no delete path: admins are provisioned at bootstrap or by the
//! `create-admin` binary, which may also replace a legacy password hash.

use schoolsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::admin_user::{AdminProfile, AdminUser, CreateAdminUser};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, name, created_at, updated_at";

/// Provides lookup and provisioning for admin accounts.
pub struct AdminUserRepo;

impl AdminUserRepo {
    /// Find an admin by email (exact, case-sensitive match).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE email = $1");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Public profile for the given id, if the account still exists.
    pub async fn find_profile_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AdminProfile>, sqlx::Error> {
        sqlx::query_as::<_, AdminProfile>("SELECT id, email, name FROM admin_users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new admin, returning the created row.
    ///
    /// Fails with a unique violation if the email is already taken.
    pub async fn create(pool: &PgPool, input: &CreateAdminUser) -> Result<AdminUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_users (email, password_hash, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Replace the stored password hash, returning the updated row.
    pub async fn update_password_hash(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!(
            "UPDATE admin_users SET password_hash = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(id)
            .bind(password_hash)
            .fetch_optional(pool)
            .await
    }

    /// List every admin's public profile, oldest first.
    pub async fn list_profiles(pool: &PgPool) -> Result<Vec<AdminProfile>, sqlx::Error> {
        sqlx::query_as::<_, AdminProfile>("SELECT id, email, name FROM admin_users ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
