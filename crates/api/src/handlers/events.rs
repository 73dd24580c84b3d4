//! Handlers for the `/events` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use schoolsite_core::error::CoreError;
use schoolsite_db::models::event::{CreateEvent, Event, UpdateEvent};
use schoolsite_db::repositories::EventRepo;

use super::require_id;
use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, QueryParams};
use crate::query::IdParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/events
///
/// All events, soonest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(events))
}

/// POST /api/events
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(event_id = event.id, title = %event.title, "Event created");

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events
///
/// Replace every editable column of the event named by `id` in the body.
pub async fn update(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let id = require_id(input.id)?;
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    tracing::info!(event_id = id, "Event updated");

    Ok(Json(event))
}

/// DELETE /api/events?id={id}
pub async fn delete(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<Json<MessageResponse>> {
    let id = require_id(params.id)?;
    if !EventRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Event", id }));
    }

    tracing::info!(event_id = id, "Event deleted");

    Ok(Json(MessageResponse::new("Event deleted successfully")))
}
