use std::net::SocketAddr;

use schoolsite_api::config::ServerConfig;
use schoolsite_api::router::build_app_router;
use schoolsite_api::state::AppState;
use schoolsite_api::{bootstrap, telemetry};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    telemetry::init("schoolsite_api=debug,schoolsite_db=debug,tower_http=debug");

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = schoolsite_db::create_pool(&config.database)
        .await
        .expect("Failed to connect to database");
    tracing::info!(
        max_connections = config.database.max_connections,
        require_tls = config.database.require_tls,
        "Database connection pool created"
    );

    schoolsite_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    // Schema, seeds and bootstrap admin must be in place before serving.
    if let Err(e) = bootstrap::run(&pool, &config.admin).await {
        tracing::error!(error = %e, "Database initialization failed");
        std::process::exit(1);
    }

    // --- Router ---
    let state = AppState::new(pool.clone(), config.clone());
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Resolve on Ctrl-C, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.expect("Failed to install Ctrl-C handler");
                tracing::info!("Received SIGINT, shutting down");
            }
            _ = sigterm.recv() => tracing::info!("Received SIGTERM, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
        tracing::info!("Received Ctrl-C, shutting down");
    }
}
