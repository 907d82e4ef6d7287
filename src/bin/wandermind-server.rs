// ABOUTME: WanderMind API server binary entry point
// ABOUTME: Initializes logging and configuration, then serves the planning routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! WanderMind API server

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use wandermind::config::ServerConfig;
use wandermind::logging::LoggingConfig;
use wandermind::resources::ServerResources;
use wandermind::routes;

/// WanderMind API - AI-powered travel itinerary planning
#[derive(Debug, Parser)]
#[command(name = "wandermind-server", version, about)]
struct Args {
    /// Listen port (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,

    /// Bind address (overrides the HOST environment variable)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env().init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }
    if let Some(host) = args.host {
        config.http.host = host;
    }

    let addr = format!("{}:{}", config.http.host, config.http.port);
    let resources = Arc::new(ServerResources::from_config(config)?);
    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("WanderMind API listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve on ctrl-c so in-flight requests can drain before exit
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install ctrl-c handler: {e}");
    }
}
