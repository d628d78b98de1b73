//! Migration: Create spec_color_bom table.

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
                    .table(SpecColorBom::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecColorBom::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpecColorBom::SpecId).integer().not_null())
                    .col(ColumnDef::new(SpecColorBom::ColorName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(SpecColorBom::ComponentName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpecColorBom::UsageDetails)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecColorBom::SapMaterialCode)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(SpecColorBom::Quantity).integer().null())
                    .col(
                        ColumnDef::new(SpecColorBom::Placement)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecColorBom::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spec_color_bom_spec_id")
                            .from(SpecColorBom::Table, SpecColorBom::SpecId)
                            .to(Specifications::Table, Specifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spec_color_bom_spec_color")
                    .table(SpecColorBom::Table)
                    .col(SpecColorBom::SpecId)
                    .col(SpecColorBom::ColorName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecColorBom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SpecColorBom {
    Table,
    Id,
    SpecId,
    ColorName,
    ComponentName,
    UsageDetails,
    SapMaterialCode,
    Quantity,
    Placement,
    CreatedAt,
}
