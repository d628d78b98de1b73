//! Supplier entity: a sourcing option for one trim.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spec_suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trim_id: i32,
    pub name: String,
    /// Supplier article number.
    pub art_no: String,
    /// Country of origin.
    pub country: String,
    #[sea_orm(column_type = "Decimal(Some((10, 6)))", nullable)]
    pub standard_cost_fob: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 6)))", nullable)]
    pub purchase_cost_cif: Option<Decimal>,
    pub lead_time_with_greige: Option<i32>,
    pub lead_time_without_greige: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trim::Entity",
        from = "Column::TrimId",
        to = "super::trim::Column::Id",
        on_delete = "Cascade"
    )]
    Trim,
}

impl Related<super::trim::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trim.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
