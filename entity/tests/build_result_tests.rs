/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

//! Tests for build result entity

use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};

#[tokio::test]
async fn test_build_result_entity_roundtrip() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![build_result::Model {
            name: "bash".to_owned(),
            arch: "amd64".to_owned(),
            success: true,
            log: "STDOUT:\nbuild finished\nSTDERR:\n".to_owned(),
        }]])
        .into_connection();

    let result = build_result::Entity::find_by_id(("bash".to_owned(), "amd64".to_owned()))
        .one(&db)
        .await?;

    assert!(result.is_some());
    let result = result.unwrap();
    assert_eq!(result.name, "bash");
    assert_eq!(result.arch, "amd64");
    assert!(result.success);
    assert_eq!(result.log, "STDOUT:\nbuild finished\nSTDERR:\n");

    Ok(())
}

#[tokio::test]
async fn test_build_result_entity_missing_pair() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<build_result::Model>::new()])
        .into_connection();

    let result = build_result::Entity::find_by_id(("bash".to_owned(), "arm64".to_owned()))
        .one(&db)
        .await?;

    assert!(result.is_none());

    Ok(())
}
