//! PostgreSQL persistence for the school site.
//!
//! The pool is created once by the caller and passed down explicitly; every
//! repository method borrows it and holds a connection only for the
//! duration of its single statement.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod models;
pub mod repositories;
pub mod schema;

pub type DbPool = sqlx::PgPool;

/// Default upper bound on pooled connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
/// Default time to wait for a free connection before failing the request.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Connection settings for the database pool.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection string.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub acquire_timeout_secs: u64,
    /// Require TLS without certificate verification (managed hosting).
    pub require_tls: bool,
}

impl DbConfig {
    /// Load database settings from environment variables.
    ///
    /// | Env Var                   | Default       |
    /// |---------------------------|---------------|
    /// | `DATABASE_URL`            | **required**  |
    /// | `DB_MAX_CONNECTIONS`      | `10`          |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`           |
    /// | `APP_ENV`                 | `development` |
    ///
    /// TLS is required when `APP_ENV=production`.
    ///
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is unset or a numeric variable does not parse.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        let require_tls = is_production(std::env::var("APP_ENV").ok().as_deref());

        Self {
            url,
            max_connections,
            acquire_timeout_secs,
            require_tls,
        }
    }
}

/// Whether the given `APP_ENV` value names the production environment.
pub fn is_production(app_env: Option<&str>) -> bool {
    app_env.is_some_and(|v| v.eq_ignore_ascii_case("production"))
}

/// Create a bounded connection pool.
///
/// In production the connection is encrypted but the server certificate is
/// not verified (`sslmode=require`), matching managed Postgres hosts that
/// present self-signed certificates. Otherwise the URL's own `sslmode` applies.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&config.url)?;
    if config.require_tls {
        options = options.ssl_mode(PgSslMode::Require);
    }

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
