//! Migration: Create spec_parsing_logs table.

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
                    .table(SpecParsingLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecParsingLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpecParsingLogs::SpecId).integer().null())
                    .col(ColumnDef::new(SpecParsingLogs::LogLevel).string_len(20).not_null())
                    .col(ColumnDef::new(SpecParsingLogs::Message).text().not_null())
                    .col(ColumnDef::new(SpecParsingLogs::LineNumber).integer().null())
                    .col(ColumnDef::new(SpecParsingLogs::Context).text().null())
                    .col(
                        ColumnDef::new(SpecParsingLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spec_parsing_logs_spec_id")
                            .from(SpecParsingLogs::Table, SpecParsingLogs::SpecId)
                            .to(Specifications::Table, Specifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spec_parsing_logs_spec_level")
                    .table(SpecParsingLogs::Table)
                    .col(SpecParsingLogs::SpecId)
                    .col(SpecParsingLogs::LogLevel)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecParsingLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SpecParsingLogs {
    Table,
    Id,
    SpecId,
    LogLevel,
    Message,
    LineNumber,
    Context,
    CreatedAt,
}
