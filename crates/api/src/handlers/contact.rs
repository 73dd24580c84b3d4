//! Handlers for the public contact form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use schoolsite_core::contact::{ContactSubmission, NewContactMessage};
use schoolsite_core::types::DbId;
use schoolsite_db::models::contact::ContactMessage;
use schoolsite_db::repositories::ContactRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Response body for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// POST /api/contact
///
/// Public. Validation runs before the insert, so a rejected submission
/// leaves no row behind.
pub async fn submit(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ContactSubmission>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    let new_message = NewContactMessage::try_from(input)?;
    let stored = ContactRepo::create(&state.pool, &new_message).await?;

    tracing::info!(message_id = stored.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Contact message submitted successfully",
            id: stored.id,
        }),
    ))
}

/// GET /api/contact
///
/// Admin only. Newest first.
pub async fn list(
    _admin: AuthAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactRepo::list(&state.pool).await?;
    Ok(Json(messages))
}
