// ABOUTME: Server binary for the Sweet Shop Management System API
// ABOUTME: Loads env configuration, migrates the database, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Sweet Shop API Server Binary
//!
//! Starts the inventory REST API with JWT authentication and SQLite
//! persistence. Configuration comes from the environment; see
//! `config::ServerConfig` for the recognized variables.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use sweet_shop_server::{
    config::ServerConfig, database::Database, logging, resources::ServerResources, routes,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "sweet-shop-server")]
#[command(about = "Sweet Shop Management System API - inventory REST service")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    info!("Starting Sweet Shop Management System API");
    info!("{}", config.summary());

    let database = Arc::new(Database::new(&config.database_url).await?);

    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        database.ensure_admin(email, password).await?;
    }

    let resources = Arc::new(ServerResources::new(database, config.clone()));
    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown signal handler: {e}");
    }
    info!("shutdown signal received");
}
