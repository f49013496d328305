/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

use anyhow::{Context, Result, ensure};
use async_compression::tokio::write::GzipEncoder;
use clap::Parser;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::task::spawn_blocking;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use walkdir::WalkDir;

const PUSH_RETRIES: usize = 3;
const RETRY_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Parser, Debug)]
#[command(name = "ReworkIt Worker", bin_name = "reworkit-worker", author = "ReworkIt Contributors", version, about, long_about = None)]
struct Cli {
    /// CIEL! workspace containing the package TREE
    #[arg(short = 'd', long, env = "REWORKIT_CIEL_WORKSPACE")]
    workspace: PathBuf,
    /// Architecture this instance builds for
    #[arg(short, long, env = "REWORKIT_ARCH")]
    arch: String,
    /// CIEL! instance name
    #[arg(short, long, default_value = "main", env = "REWORKIT_CIEL_INSTANCE")]
    instance: String,
    /// ReworkIt server URL
    #[arg(short, long, env = "REWORKIT_URL")]
    url: String,
    /// Secret token shared with the server
    #[arg(short, long, env = "REWORKIT_SECRET")]
    token: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(filter))
        .init();

    let cli = Cli::parse();
    let client = Client::builder().user_agent("reworkit-worker").build()?;

    loop {
        if let Err(e) = run_cycle(&cli, &client).await {
            error!("Build cycle failed: {}", e);
        }

        tokio::time::sleep(RETRY_INTERVAL).await;
    }
}

async fn run_cycle(cli: &Cli, client: &Client) -> Result<()> {
    let tree = cli.workspace.join("TREE");

    info!("Updating package tree");
    let git_pull = Command::new("git")
        .arg("pull")
        .current_dir(&tree)
        .output()
        .await?;
    ensure!(git_pull.status.success(), "Failed to run git pull");

    let packages = spawn_blocking(move || list_packages(&tree)).await?;

    info!("Refreshing build environment");
    let ciel_update = Command::new("ciel").arg("update-os").output().await?;
    ensure!(ciel_update.status.success(), "Failed to run ciel update-os");

    for package in packages {
        info!("Building {}", package);
        let (success, log) = build_package(&cli.instance, &package).await?;
        info!("Build of {} succeeded: {}", package, success);

        let log = match compress_log(log).await {
            Ok(log) => log,
            Err(e) => {
                error!("Failed to compress log for {}: {}", package, e);
                continue;
            }
        };

        for attempt in 1..=PUSH_RETRIES {
            match push_result(cli, client, &package, success, log.clone()).await {
                Ok(()) => break,
                Err(e) => {
                    error!(
                        "({}/{}) Failed to push result for {}: {}",
                        attempt, PUSH_RETRIES, package, e
                    );
                    tokio::time::sleep(RETRY_INTERVAL).await;
                }
            }
        }
    }

    Ok(())
}

async fn build_package(instance: &str, package: &str) -> Result<(bool, Vec<u8>)> {
    let output = Command::new("ciel")
        .arg("build")
        .arg("-i")
        .arg(instance)
        .arg(package)
        .output()
        .await?;

    let mut log = Vec::new();
    log.extend(b"STDOUT:\n");
    log.extend(output.stdout);
    log.extend(b"STDERR:\n");
    log.extend(output.stderr);

    Ok((output.status.success(), log))
}

async fn push_result(
    cli: &Cli,
    client: &Client,
    package: &str,
    success: bool,
    log: Vec<u8>,
) -> Result<()> {
    let form = Form::new()
        .text("name", package.to_string())
        .text("arch", cli.arch.clone())
        .text("success", success.to_string())
        .part(
            "log",
            Part::bytes(log).file_name(format!("{package}.log")),
        );

    client
        .post(format!("{}/api/result", cli.url))
        .header("SECRET", cli.token.as_str())
        .multipart(form)
        .send()
        .await?
        .error_for_status()
        .context("Server rejected build result")?;

    Ok(())
}

async fn compress_log(log: Vec<u8>) -> Result<Vec<u8>> {
    let mut compressed = Vec::new();
    let mut encoder = GzipEncoder::new(&mut compressed);
    encoder.write_all(&log).await?;
    encoder.shutdown().await?;

    Ok(compressed)
}

/// Packages live two levels deep in the TREE (section/package); the
/// groups and assets directories hold no buildable packages.
fn list_packages(tree: &Path) -> Vec<String> {
    let mut packages = Vec::new();

    for entry in WalkDir::new(tree)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .flatten()
    {
        let path = entry.path();
        if path.components().any(|c| c.as_os_str() == ".git")
            || path.starts_with(tree.join("groups"))
            || path.starts_with(tree.join("assets"))
        {
            continue;
        }

        if entry.file_type().is_dir() {
            packages.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    packages
}
