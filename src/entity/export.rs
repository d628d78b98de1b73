//! Export entity: append-only audit record of one export operation.
//!
//! `spec_id` is set to NULL when the specification is deleted so history survives.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spec_exports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spec_id: Option<i32>,
    pub export_type: String,
    pub export_format: String,
    pub filename: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub file_path: Option<String>,
    pub exported_at: DateTimeUtc,
    pub exported_by: Option<i32>,
    pub record_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::specification::Entity",
        from = "Column::SpecId",
        to = "super::specification::Column::Id",
        on_delete = "SetNull"
    )]
    Specification,
}

impl Related<super::specification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
