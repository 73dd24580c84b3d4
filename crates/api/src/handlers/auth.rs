//! Handlers for admin login and session introspection.

use axum::extract::State;
use axum::Json;
use schoolsite_core::error::CoreError;
use schoolsite_db::models::admin_user::AdminProfile;
use schoolsite_db::repositories::AdminUserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{is_argon2_hash, verify_password, verify_unknown_account};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Body for every failed credential check, whichever part was wrong.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Request body for `POST /api/admin/auth`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AdminProfile,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

/// Run Argon2 work on the blocking pool so it does not stall other requests.
async fn off_runtime<T, F>(work: F) -> AppResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::InternalError(format!("Password task failed: {e}")))
}

/// POST /api/admin/auth
///
/// Exchange email + password for a signed session token.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (email, password) = match (input.email, input.password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => {
            return Err(AppError::BadRequest(
                "Email and password are required".into(),
            ))
        }
    };

    let Some(admin) = AdminUserRepo::find_by_email(&state.pool, &email).await? else {
        off_runtime(move || verify_unknown_account(&password)).await?;
        return Err(invalid_credentials());
    };

    if !is_argon2_hash(&admin.password_hash) {
        tracing::warn!(
            admin_id = admin.id,
            "Stored password hash is not Argon2; re-provision this admin with create-admin"
        );
        off_runtime(move || verify_unknown_account(&password)).await?;
        return Err(invalid_credentials());
    }

    let stored_hash = admin.password_hash.clone();
    let password_valid = off_runtime(move || verify_password(&password, &stored_hash))
        .await?
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(admin_id = admin.id, "Rejected login with wrong password");
        return Err(invalid_credentials());
    }

    let token = generate_token(admin.id, &admin.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        user: AdminProfile::from(&admin),
    }))
}

/// GET /api/admin/me
///
/// Profile of the admin the bearer token was issued to. A token for an
/// account that no longer exists is rejected like any other bad token.
pub async fn me(admin: AuthAdmin, State(state): State<AppState>) -> AppResult<Json<AdminProfile>> {
    let profile = AdminUserRepo::find_profile_by_id(&state.pool, admin.admin_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))?;
    Ok(Json(profile))
}
