//! Migration: Create spec_exports table.
//!
//! Export history outlives its specification: the foreign key is SET NULL.

use sea_orm_migration::prelude::*;

use super::m20261019_000001_create_specifications::Specifications;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpecExports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecExports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpecExports::SpecId).integer().null())
                    .col(ColumnDef::new(SpecExports::ExportType).string_len(50).not_null())
                    .col(ColumnDef::new(SpecExports::ExportFormat).string_len(50).not_null())
                    .col(ColumnDef::new(SpecExports::Filename).string_len(255).not_null())
                    .col(ColumnDef::new(SpecExports::FilePath).text().null())
                    .col(
                        ColumnDef::new(SpecExports::ExportedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SpecExports::ExportedBy).integer().null())
                    .col(
                        ColumnDef::new(SpecExports::RecordCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spec_exports_spec_id")
                            .from(SpecExports::Table, SpecExports::SpecId)
                            .to(Specifications::Table, Specifications::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spec_exports_spec_exported_at")
                    .table(SpecExports::Table)
                    .col(SpecExports::SpecId)
                    .col(SpecExports::ExportedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecExports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SpecExports {
    Table,
    Id,
    SpecId,
    ExportType,
    ExportFormat,
    Filename,
    FilePath,
    ExportedAt,
    ExportedBy,
    RecordCount,
}
