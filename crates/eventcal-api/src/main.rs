// Eventcal API server

use anyhow::{Context, Result};
use eventcal_api::build_app;
use eventcal_api::config::{ServerConfig, StorageMode};
use eventcal_storage::StorageBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real deployments inject the environment directly
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "eventcal_api=debug,eventcal_storage=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("eventcal-api starting...");

    let config = ServerConfig::from_env();

    let storage = match config.storage {
        StorageMode::Postgres => {
            let storage = StorageBackend::postgres(&config.database)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");
            storage
        }
        StorageMode::Memory => {
            tracing::warn!("Using in-memory storage; events are lost on restart");
            StorageBackend::in_memory()
        }
    };

    if config.run_migrations {
        match &storage {
            StorageBackend::Postgres(db) => {
                db.migrate().await.context("Failed to apply migrations")?;
            }
            StorageBackend::InMemory(_) => {
                tracing::info!("RUN_MIGRATIONS ignored for in-memory storage");
            }
        }
    }

    let app = build_app(storage.clone());

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    storage.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
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
            Ok(mut signal) => {
                signal.recv().await;
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
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Received shutdown signal");
}
