//! Migration: Create spec_trims table.

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
                    .table(SpecTrims::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecTrims::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpecTrims::SpecId).integer().not_null())
                    .col(ColumnDef::new(SpecTrims::Number).string_len(50).not_null())
                    .col(ColumnDef::new(SpecTrims::Description).text().not_null())
                    .col(ColumnDef::new(SpecTrims::Um).string_len(20).not_null().default(""))
                    .col(
                        ColumnDef::new(SpecTrims::FiberContent)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecTrims::FiberContentBack)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecTrims::MaterialCoating)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecTrims::MaterialFinish)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(SpecTrims::MaterialLaminate)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(SpecTrims::TrimSpecific).text().not_null().default(""))
                    .col(
                        ColumnDef::new(SpecTrims::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpecTrims::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spec_trims_spec_id")
                            .from(SpecTrims::Table, SpecTrims::SpecId)
                            .to(Specifications::Table, Specifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spec_trims_spec_id")
                    .table(SpecTrims::Table)
                    .col(SpecTrims::SpecId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spec_trims_number")
                    .table(SpecTrims::Table)
                    .col(SpecTrims::Number)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecTrims::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpecTrims {
    Table,
    Id,
    SpecId,
    Number,
    Description,
    Um,
    FiberContent,
    FiberContentBack,
    MaterialCoating,
    MaterialFinish,
    MaterialLaminate,
    TrimSpecific,
    CreatedAt,
    UpdatedAt,
}
