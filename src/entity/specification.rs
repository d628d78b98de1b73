//! Specification entity: one uploaded trim specification document.
//!
//! Owns its trims, color BOM rows, measurements, stored file and parsing logs
//! (all cascade-deleted). Export rows survive deletion with a nulled `spec_id`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "specifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Name the file was stored under.
    pub filename: String,
    /// Name the file was uploaded with.
    pub original_filename: String,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub upload_date: DateTimeUtc,
    pub parsed_date: Option<DateTimeUtc>,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub error_message: Option<String>,
    // Derived counters, recomputed after every import.
    pub total_trims: i32,
    pub total_suppliers: i32,
    pub total_colors: i32,
    pub total_measurements: i32,
    pub created_by: Option<i32>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trim::Entity")]
    Trims,
    #[sea_orm(has_many = "super::color_bom::Entity")]
    ColorBom,
    #[sea_orm(has_many = "super::measurement::Entity")]
    Measurements,
    #[sea_orm(has_one = "super::spec_file::Entity")]
    SpecFile,
    #[sea_orm(has_many = "super::export::Entity")]
    Exports,
    #[sea_orm(has_many = "super::parsing_log::Entity")]
    ParsingLogs,
}

impl Related<super::trim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trims.def()
    }
}

impl Related<super::color_bom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ColorBom.def()
    }
}

impl Related<super::measurement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Measurements.def()
    }
}

impl Related<super::spec_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpecFile.def()
    }
}

impl Related<super::export::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exports.def()
    }
}

impl Related<super::parsing_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParsingLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
