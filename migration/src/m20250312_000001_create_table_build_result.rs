/*
 * SPDX-FileCopyrightText: 2025 ReworkIt Contributors
 *
 * SPDX-License-Identifier: MIT
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BuildResult::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BuildResult::Name).text().not_null())
                    .col(ColumnDef::new(BuildResult::Arch).text().not_null())
                    .col(ColumnDef::new(BuildResult::Success).boolean().not_null())
                    .col(ColumnDef::new(BuildResult::Log).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-build_result-name-arch")
                    .table(BuildResult::Table)
                    .col(BuildResult::Name)
                    .col(BuildResult::Arch)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BuildResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BuildResult {
    Table,
    Name,
    Arch,
    Success,
    Log,
}
