/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

use reworkit_core::types::{Cli, ServerState};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-secret";

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        secret: Some(TEST_SECRET.to_string()),
        secret_file: None,
    }
}

pub fn create_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        secret: TEST_SECRET.to_string(),
        cli: create_mock_cli(),
    })
}

pub fn create_empty_state() -> Arc<ServerState> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::build_result::Model>::new()])
        .into_connection();

    create_state(db)
}
