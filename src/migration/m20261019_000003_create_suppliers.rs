//! Migration: Create spec_suppliers table.
//!
//! Suppliers hang off trims; deleting a trim (or its specification) removes them.

use sea_orm_migration::prelude::*;

use super::m20261019_000002_create_trims::SpecTrims;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpecSuppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecSuppliers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpecSuppliers::TrimId).integer().not_null())
                    .col(ColumnDef::new(SpecSuppliers::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(SpecSuppliers::ArtNo)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecSuppliers::Country)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecSuppliers::StandardCostFob)
                            .decimal_len(10, 6)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SpecSuppliers::PurchaseCostCif)
                            .decimal_len(10, 6)
                            .null(),
                    )
                    .col(ColumnDef::new(SpecSuppliers::LeadTimeWithGreige).integer().null())
                    .col(
                        ColumnDef::new(SpecSuppliers::LeadTimeWithoutGreige)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SpecSuppliers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpecSuppliers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spec_suppliers_trim_id")
                            .from(SpecSuppliers::Table, SpecSuppliers::TrimId)
                            .to(SpecTrims::Table, SpecTrims::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spec_suppliers_trim_id")
                    .table(SpecSuppliers::Table)
                    .col(SpecSuppliers::TrimId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecSuppliers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SpecSuppliers {
    Table,
    Id,
    TrimId,
    Name,
    ArtNo,
    Country,
    StandardCostFob,
    PurchaseCostCif,
    LeadTimeWithGreige,
    LeadTimeWithoutGreige,
    CreatedAt,
    UpdatedAt,
}
