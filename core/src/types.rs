/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "ReworkIt", display_name = "ReworkIt!", bin_name = "reworkit-server", author = "ReworkIt Contributors", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "REWORKIT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "REWORKIT_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "REWORKIT_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "REWORKIT_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "REWORKIT_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "REWORKIT_SECRET")]
    pub secret: Option<String>,
    #[arg(long, env = "REWORKIT_SECRET_FILE")]
    pub secret_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub secret: String,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EBuildResult = build_result::Entity;
pub type MBuildResult = build_result::Model;
pub type ABuildResult = build_result::ActiveModel;
pub type CBuildResult = build_result::Column;
