/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod types;

use anyhow::{Context, Result};
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use tracing::info;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    info!("Starting ReworkIt server on {}:{}", cli.ip, cli.port);

    let secret = if let Some(file) = &cli.secret_file {
        std::fs::read_to_string(file)
            .context("Failed to read secret token from file")?
            .trim()
            .to_string()
    } else if let Some(secret) = &cli.secret {
        secret.clone()
    } else {
        anyhow::bail!("No secret token provided");
    };

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, secret, cli }))
}
