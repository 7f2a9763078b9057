// ABOUTME: Server binary for the Pyxis Store Info API
// ABOUTME: Loads configuration, initializes logging, connects collaborators and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! # Pyxis Store Info Server Binary
//!
//! Starts the read-only district statistics API.

use anyhow::{Context, Result};
use clap::Parser;
use pyxis_store_info::{config::ServerConfig, logging, server};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pyxis-store-info-server")]
#[command(about = "Pyxis Store Info - commercial district statistics API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("Starting Pyxis Store Info API");
    info!("{}", config.summary());

    let resources = server::ServerResources::from_config(&config)
        .await
        .context("Failed to initialize server resources")?;

    if let Err(e) = server::run(&config, Arc::new(resources)).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
