//! ColorBom entity: one component-to-color assignment.
//!
//! Color names are plain attributes; the same color repeats across rows.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spec_color_bom")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spec_id: i32,
    pub color_name: String,
    pub component_name: String,
    #[sea_orm(column_type = "Text")]
    pub usage_details: String,
    pub sap_material_code: String,
    pub quantity: Option<i32>,
    pub placement: String,
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
