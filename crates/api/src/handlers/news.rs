//! Handlers for the `/news` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use schoolsite_core::error::CoreError;
use schoolsite_db::models::news::{CreateNewsArticle, NewsArticle, UpdateNewsArticle};
use schoolsite_db::repositories::NewsRepo;

use super::require_id;
use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, QueryParams};
use crate::query::IdParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/news
///
/// All articles, newest first. Drafts are included.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NewsArticle>>> {
    let articles = NewsRepo::list(&state.pool).await?;
    Ok(Json(articles))
}

/// POST /api/news
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateNewsArticle>,
) -> AppResult<(StatusCode, Json<NewsArticle>)> {
    let article = NewsRepo::create(&state.pool, &input).await?;

    tracing::info!(article_id = article.id, title = %article.title, "News article created");

    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/news
pub async fn update(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpdateNewsArticle>,
) -> AppResult<Json<NewsArticle>> {
    let id = require_id(input.id)?;
    let article = NewsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "NewsArticle",
            id,
        }))?;

    tracing::info!(article_id = id, "News article updated");

    Ok(Json(article))
}

/// DELETE /api/news?id={id}
pub async fn delete(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<Json<MessageResponse>> {
    let id = require_id(params.id)?;
    if !NewsRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "NewsArticle",
            id,
        }));
    }

    tracing::info!(article_id = id, "News article deleted");

    Ok(Json(MessageResponse::new("News article deleted successfully")))
}
