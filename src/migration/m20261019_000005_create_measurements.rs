//! Migration: Create spec_measurements table.

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
                    .table(SpecMeasurements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecMeasurements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpecMeasurements::SpecId).integer().not_null())
                    .col(
                        ColumnDef::new(SpecMeasurements::MeasurementKey)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpecMeasurements::MeasurementValue)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecMeasurements::Unit)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecMeasurements::SizeVariant)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecMeasurements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spec_measurements_spec_id")
                            .from(SpecMeasurements::Table, SpecMeasurements::SpecId)
                            .to(Specifications::Table, Specifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spec_measurements_spec_id")
                    .table(SpecMeasurements::Table)
                    .col(SpecMeasurements::SpecId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecMeasurements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SpecMeasurements {
    Table,
    Id,
    SpecId,
    MeasurementKey,
    MeasurementValue,
    Unit,
    SizeVariant,
    CreatedAt,
}
