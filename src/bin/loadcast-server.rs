// ABOUTME: Server binary for the Loadcast training load forecaster
// ABOUTME: Loads environment configuration, initializes logging and the shared client, then serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

//! # Loadcast Server Binary

use anyhow::Result;
use clap::Parser;
use loadcast_providers::initialize_shared_client;
use loadcast_server::{config::ServerConfig, logging, resources::ServerResources, server};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "loadcast-server")]
#[command(about = "Loadcast - short-horizon training load forecasts from exercise history")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    initialize_shared_client(config.upstream.client_timeouts());

    let bind_address = config.bind_address();
    let resources = Arc::new(ServerResources::from_config(Arc::new(config))?);
    info!("Endpoints: POST /predict, /predict_core, /predict_chest, /predict/:muscle_group; GET /health, /ready");

    server::run(&bind_address, resources).await
}
