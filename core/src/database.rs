/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

/// Records the outcome of a build, replacing any previously recorded
/// result for the same (name, arch) pair.
pub async fn upsert_result(
    db: &DatabaseConnection,
    name: &str,
    arch: &str,
    success: bool,
    log: String,
) -> Result<()> {
    let aresult = ABuildResult {
        name: Set(name.to_string()),
        arch: Set(arch.to_string()),
        success: Set(success),
        log: Set(log),
    };

    EBuildResult::insert(aresult)
        .on_conflict(
            OnConflict::columns([CBuildResult::Name, CBuildResult::Arch])
                .update_columns([CBuildResult::Success, CBuildResult::Log])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .context("Failed to upsert build result")?;

    Ok(())
}

pub async fn get_result(
    db: &DatabaseConnection,
    name: &str,
    arch: &str,
) -> Result<Option<MBuildResult>> {
    EBuildResult::find()
        .filter(CBuildResult::Name.eq(name))
        .filter(CBuildResult::Arch.eq(arch))
        .one(db)
        .await
        .context("Failed to query build result")
}

pub async fn list_results(db: &DatabaseConnection, name: &str) -> Result<Vec<MBuildResult>> {
    EBuildResult::find()
        .filter(CBuildResult::Name.eq(name))
        .order_by_asc(CBuildResult::Arch)
        .all(db)
        .await
        .context("Failed to query build results")
}
