//! Trim entity: one component line item of a specification.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spec_trims")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spec_id: i32,
    /// Component number, e.g. "ZIP-01".
    pub number: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Unit of measure.
    pub um: String,
    pub fiber_content: String,
    pub fiber_content_back: String,
    pub material_coating: String,
    /// Material finish (face).
    pub material_finish: String,
    pub material_laminate: String,
    #[sea_orm(column_type = "Text")]
    pub trim_specific: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
    #[sea_orm(has_many = "super::supplier::Entity")]
    Suppliers,
}

impl Related<super::specification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specification.def()
    }
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suppliers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
