//! Startup provisioning: schema initialization and the bootstrap admin.

use schoolsite_core::error::CoreError;
use schoolsite_db::models::admin_user::{AdminProfile, CreateAdminUser};
use schoolsite_db::repositories::AdminUserRepo;
use schoolsite_db::schema::{self, InitReport};
use schoolsite_db::DbPool;

use crate::auth::password::{hash_password, is_argon2_hash, validate_password_strength};
use crate::error::{AppError, AppResult};

const DEFAULT_ADMIN_EMAIL: &str = "admin@school.local";
const DEFAULT_ADMIN_NAME: &str = "Admin User";

/// Account that [`run`] ensures exists.
#[derive(Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub name: String,
    /// Plaintext password. When `None`, no account is provisioned.
    pub password: Option<String>,
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AdminBootstrap {
    /// | Env Var          | Default              |
    /// |------------------|----------------------|
    /// | `ADMIN_EMAIL`    | `admin@school.local` |
    /// | `ADMIN_NAME`     | `Admin User`         |
    /// | `ADMIN_PASSWORD` | unset                |
    pub fn from_env() -> Self {
        Self {
            email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.into()),
            name: std::env::var("ADMIN_NAME").unwrap_or_else(|_| DEFAULT_ADMIN_NAME.into()),
            password: std::env::var("ADMIN_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),
        }
    }
}

/// Outcome of [`provision_admin`].
#[derive(Debug, Clone)]
pub enum Provisioned {
    Created(AdminProfile),
    AlreadyExists(AdminProfile),
    /// An existing account had a non-Argon2 hash, now replaced.
    Rehashed(AdminProfile),
}

/// Initialize the schema, then make sure the bootstrap admin exists.
///
/// Any error here means the server must not start.
pub async fn run(pool: &DbPool, admin: &AdminBootstrap) -> AppResult<InitReport> {
    let report = schema::initialize(pool).await?;

    match &admin.password {
        Some(password) => match provision_admin(pool, &admin.email, &admin.name, password).await? {
            Provisioned::Created(profile) => {
                tracing::info!(
                    admin_id = profile.id,
                    email = %profile.email,
                    "Bootstrap admin created"
                );
            }
            Provisioned::AlreadyExists(profile) => {
                tracing::debug!(admin_id = profile.id, "Bootstrap admin already exists");
            }
            Provisioned::Rehashed(profile) => {
                tracing::info!(
                    admin_id = profile.id,
                    email = %profile.email,
                    "Bootstrap admin password rehashed with Argon2"
                );
            }
        },
        None => {
            tracing::warn!(
                email = %admin.email,
                "ADMIN_PASSWORD is not set; skipping bootstrap admin provisioning"
            );
        }
    }

    Ok(report)
}

/// Create an admin account unless one with the same email already exists.
///
/// An existing account keeps its password, unless the stored hash is not
/// Argon2 (a bcrypt hash from an older deployment). That hash can never
/// verify, so it is replaced with one for `password`.
pub async fn provision_admin(
    pool: &DbPool,
    email: &str,
    name: &str,
    password: &str,
) -> AppResult<Provisioned> {
    let existing = AdminUserRepo::find_by_email(pool, email).await?;
    if let Some(existing) = &existing {
        if is_argon2_hash(&existing.password_hash) {
            return Ok(Provisioned::AlreadyExists(AdminProfile::from(existing)));
        }
    }

    validate_password_strength(password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    if let Some(existing) = existing {
        let updated = AdminUserRepo::update_password_hash(pool, existing.id, &password_hash)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "AdminUser",
                id: existing.id,
            }))?;
        return Ok(Provisioned::Rehashed(AdminProfile::from(&updated)));
    }

    let created = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            email: email.to_string(),
            password_hash,
            name: Some(name.to_string()),
        },
    )
    .await?;

    Ok(Provisioned::Created(AdminProfile::from(&created)))
}
