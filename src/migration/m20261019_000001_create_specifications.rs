//! Migration: Create specifications table.
//!
//! One row per uploaded specification document with its status lifecycle
//! (uploaded -> parsing -> parsed | error) and derived counters.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Specifications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Specifications::Filename).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Specifications::OriginalFilename)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Specifications::FileType).string_len(50).null())
                    .col(ColumnDef::new(Specifications::FileSize).big_integer().null())
                    .col(
                        ColumnDef::new(Specifications::UploadDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Specifications::ParsedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Specifications::Status)
                            .string_len(20)
                            .not_null()
                            .default("uploaded"),
                    )
                    .col(ColumnDef::new(Specifications::ErrorMessage).text().null())
                    .col(
                        ColumnDef::new(Specifications::TotalTrims)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Specifications::TotalSuppliers)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Specifications::TotalColors)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Specifications::TotalMeasurements)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Specifications::CreatedBy).integer().null())
                    .col(
                        ColumnDef::new(Specifications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing newest uploads first
        manager
            .create_index(
                Index::create()
                    .name("idx_specifications_upload_date")
                    .table(Specifications::Table)
                    .col(Specifications::UploadDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_specifications_status")
                    .table(Specifications::Table)
                    .col(Specifications::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Specifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Specifications {
    Table,
    Id,
    Filename,
    OriginalFilename,
    FileType,
    FileSize,
    UploadDate,
    ParsedDate,
    Status,
    ErrorMessage,
    TotalTrims,
    TotalSuppliers,
    TotalColors,
    TotalMeasurements,
    CreatedBy,
    UpdatedAt,
}
