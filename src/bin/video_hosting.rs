//! Video Hosting Binary
//!
//! Wires up:
//! - Configuration (environment, optional env file)
//! - Tracing subscriber for the run mode
//! - PostgreSQL video store, closed on SIGINT/SIGTERM
//!
//! Usage: `video-hosting [ENV_FILE]`
//!
//! Environment Variables:
//! - MODE: local | dev | prod (default dev)
//! - POSTGRES_URL: PostgreSQL connection URL (required)
//! - DB_MAX_CONNECTIONS, DB_ACQUIRE_TIMEOUT_SECS: pool tuning
//! - DB_MIGRATE: apply schema migrations on startup

use vidhost::application::lifecycle::StoreService;
use vidhost::config::AppConfig;
use vidhost::telemetry::init_tracing;
use vidhost::PostgresVideoRepository;

#[tokio::main]
async fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_env_file(path),
        None => AppConfig::from_env(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.mode);
    tracing::debug!(db = ?config.db, "Configuration loaded");

    // 1. Storage
    let store = match PostgresVideoRepository::connect_with(&config.db).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to init video store");
            std::process::exit(1);
        }
    };

    if config.db.run_migrations {
        if let Err(e) = store.migrate().await {
            tracing::error!(error = %e, "Failed to migrate video store");
            std::process::exit(1);
        }
    }

    // 2. Run until signalled
    let service = StoreService::new(store);
    if let Err(e) = service.run_until(shutdown_signal()).await {
        tracing::error!(error = %e, "Failed to close video store");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
