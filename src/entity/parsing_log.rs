//! ParsingLog entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spec_parsing_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spec_id: Option<i32>,
    pub log_level: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub line_number: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub context: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::specification::Entity",
        from = "Column::SpecId",
        to = "super::specification::Column::Id",
        on_delete = "Cascade"
    )]
    Specification,
}

impl Related<super::specification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
