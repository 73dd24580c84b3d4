use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: schoolsite_db::DbPool,
    /// Server configuration (JWT settings are read by the auth handlers).
    pub config: Arc<ServerConfig>,
    /// Process start, reported as `uptime` by the health check.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pool: schoolsite_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
