//! ShelterConnect API server

mod app;
mod cli;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use sea_orm::Database;
use shelter_service::ShelterServiceModule;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::cli::Cli;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli)?;
    logging::init(&config.logging)?;

    tracing::info!(
        bind = %config.server.bind_addr,
        upload_dir = %config.upload_dir().display(),
        "starting shelterconnect-server"
    );

    let db = Database::connect(&config.database.url)
        .await
        .with_context(|| format!("failed to connect to database {}", config.database.url))?;
    let db = Arc::new(db);

    let module = ShelterServiceModule::default();
    module.migrate(&db).await?;
    module
        .init(config.shelter_service.clone(), db.clone())
        .await?;

    let router = app::build_router(&config.server, &module, db)?;

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!("listening on {}", config.server.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received, draining connections");
}
