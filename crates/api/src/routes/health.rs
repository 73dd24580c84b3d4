use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"OK"` while the process is serving.
    pub status: &'static str,
    /// Current server time, RFC 3339.
    pub timestamp: String,
    /// Seconds since the server started.
    pub uptime: f64,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- liveness plus a database probe.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = schoolsite_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check: database unreachable");
    }

    Json(HealthResponse {
        status: "OK",
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        db_healthy,
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
