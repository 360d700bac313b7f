// src/main.rs
use std::error::Error;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;
use sales_api::config::{Config, StoreKind};
use sales_api::state::AppState;
use sales_api::store::{MemoryProductStore, PgProductStore, ProductStore};
use sales_api::{app, database};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server stopped with error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    let store: Arc<dyn ProductStore> = match config.store {
        StoreKind::Postgres => {
            let database_url = config.database_url.as_deref().ok_or("DATABASE_URL must be set")?;
            let db_pool = database::create_pool(database_url, config.db_max_connections).await?;
            database::migrate(&db_pool).await?;
            tracing::info!("Database migrations applied");
            Arc::new(PgProductStore::new(db_pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store, data will not persist");
            Arc::new(MemoryProductStore::new())
        }
    };

    let app = app(AppState::new(store));

    // Try base_port..base_port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error = %e, "Port in use, trying next");
                    }
                }
            }
        }
        let (l, addr) = bound.ok_or_else(|| {
            format!("failed to bind to any port starting at {} on {}", config.port, config.host)
        })?;
        tracing::info!("Server running on {}", addr);
        l
    };

    let stopping = Arc::new(Notify::new());
    let trigger = stopping.clone();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown started");
        trigger.notify_one();
    });

    let deadline = async {
        stopping.notified().await;
        tokio::time::sleep(config.shutdown_timeout).await;
    };

    tokio::select! {
        result = server.into_future() => result?,
        _ = deadline => tracing::warn!(timeout = ?config.shutdown_timeout, "Graceful shutdown timed out"),
    }

    tracing::info!("Shutdown complete");
    Ok(())
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
