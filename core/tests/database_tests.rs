/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

//! Tests for the build result store


use entity::*;
use reworkit_core::database::{get_result, list_results, upsert_result};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

fn result_row(name: &str, arch: &str, success: bool, log: &str) -> build_result::Model {
    build_result::Model {
        name: name.to_owned(),
        arch: arch.to_owned(),
        success,
        log: log.to_owned(),
    }
}

#[tokio::test]
async fn test_get_result_returns_matching_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![result_row("app", "amd64", false, "linker error")]])
        .into_connection();

    let result = get_result(&db, "app", "amd64").await.unwrap();

    let result = result.expect("row should be found");
    assert_eq!(result.name, "app");
    assert_eq!(result.arch, "amd64");
    assert!(!result.success);
    assert_eq!(result.log, "linker error");
}

#[tokio::test]
async fn test_get_result_missing_pair_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<build_result::Model>::new()])
        .into_connection();

    let result = get_result(&db, "app", "riscv64").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_results_returns_all_architectures() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            result_row("app", "amd64", true, "ok"),
            result_row("app", "arm64", false, "failed"),
        ]])
        .into_connection();

    let results = list_results(&db, "app").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].arch, "amd64");
    assert!(results[0].success);
    assert_eq!(results[1].arch, "arm64");
    assert!(!results[1].success);
}

#[tokio::test]
async fn test_upsert_result_executes_single_statement() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    upsert_result(&db, "app", "amd64", true, "ok".to_string())
        .await
        .unwrap();

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn test_upsert_result_replaces_on_conflict() {
    // Two upserts for the same pair both succeed; the conflict path is an
    // update, not an error.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ])
        .into_connection();

    upsert_result(&db, "app", "amd64", false, "failed".to_string())
        .await
        .unwrap();
    upsert_result(&db, "app", "amd64", true, "fixed".to_string())
        .await
        .unwrap();
}
