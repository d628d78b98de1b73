//! Migration: Create spec_files table (one stored file per specification).

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
                    .table(SpecFiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecFiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SpecFiles::SpecId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SpecFiles::FilePath).text().null())
                    .col(ColumnDef::new(SpecFiles::FileContent).text().null())
                    .col(
                        ColumnDef::new(SpecFiles::StorageType)
                            .string_len(50)
                            .not_null()
                            .default("filesystem"),
                    )
                    .col(
                        ColumnDef::new(SpecFiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spec_files_spec_id")
                            .from(SpecFiles::Table, SpecFiles::SpecId)
                            .to(Specifications::Table, Specifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecFiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SpecFiles {
    Table,
    Id,
    SpecId,
    FilePath,
    FileContent,
    StorageType,
    CreatedAt,
}
