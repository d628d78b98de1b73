//! SeaORM database migrations.
//!
//! Built with the sea-query table builder so the same schema applies to
//! PostgreSQL and SQLite.

pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_specifications;
mod m20261019_000002_create_trims;
mod m20261019_000003_create_suppliers;
mod m20261019_000004_create_color_bom;
mod m20261019_000005_create_measurements;
mod m20261019_000006_create_spec_files;
mod m20261019_000007_create_exports;
mod m20261019_000008_create_parsing_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_specifications::Migration),
            Box::new(m20261019_000002_create_trims::Migration),
            Box::new(m20261019_000003_create_suppliers::Migration),
            Box::new(m20261019_000004_create_color_bom::Migration),
            Box::new(m20261019_000005_create_measurements::Migration),
            Box::new(m20261019_000006_create_spec_files::Migration),
            Box::new(m20261019_000007_create_exports::Migration),
            Box::new(m20261019_000008_create_parsing_logs::Migration),
        ]
    }
}
