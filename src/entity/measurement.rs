//! Measurement entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spec_measurements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spec_id: i32,
    pub measurement_key: String,
    /// Kept as text: values mix units and ranges ("12 1/2", "30-32").
    pub measurement_value: String,
    pub unit: String,
    pub size_variant: String,
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
