//! Database queries for trims and their suppliers.

use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entity::supplier::{self, Entity as Supplier};
use crate::entity::trim::{self, Entity as Trim};
use crate::error::{AppError, AppResult};
use crate::models::{SupplierRecord, TrimRecord};

use super::count_to_i32;

/// Insert one trim (without its suppliers) and return it with its generated ID.
pub async fn insert_trim<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
    record: &TrimRecord,
) -> AppResult<trim::Model> {
    let now = Utc::now();

    let model = trim::ActiveModel {
        spec_id: Set(spec_id),
        number: Set(record.number.clone()),
        description: Set(record.description.clone()),
        um: Set(record.um.clone()),
        fiber_content: Set(record.fiber_content.clone()),
        fiber_content_back: Set(record.fiber_content_back.clone()),
        material_coating: Set(record.material_coating.clone()),
        material_finish: Set(record.material_finish.clone()),
        material_laminate: Set(record.material_laminate.clone()),
        trim_specific: Set(record.trim_specific.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert trim: {}", e)))
}

/// Insert suppliers for a trim in one batch. Returns the number inserted.
pub async fn insert_suppliers<C: ConnectionTrait>(
    db: &C,
    trim_id: i32,
    records: &[SupplierRecord],
) -> AppResult<u64> {
    if records.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let models = records.iter().map(|r| supplier::ActiveModel {
        trim_id: Set(trim_id),
        name: Set(r.name.clone()),
        art_no: Set(r.art_no.clone()),
        country: Set(r.country.clone()),
        standard_cost_fob: Set(r.standard_cost_fob),
        purchase_cost_cif: Set(r.purchase_cost_cif),
        lead_time_with_greige: Set(r.lead_time_with_greige),
        lead_time_without_greige: Set(r.lead_time_without_greige),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    });

    Supplier::insert_many(models)
        .exec(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert suppliers: {}", e)))?;

    Ok(records.len() as u64)
}

/// Get all trims of a specification in insertion order.
pub async fn list_by_spec<C: ConnectionTrait>(db: &C, spec_id: i32) -> AppResult<Vec<trim::Model>> {
    Trim::find()
        .filter(trim::Column::SpecId.eq(spec_id))
        .order_by_asc(trim::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get trims: {}", e)))
}

/// Get the suppliers of one trim.
pub async fn list_suppliers<C: ConnectionTrait>(
    db: &C,
    trim_id: i32,
) -> AppResult<Vec<supplier::Model>> {
    Supplier::find()
        .filter(supplier::Column::TrimId.eq(trim_id))
        .order_by_asc(supplier::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get suppliers: {}", e)))
}

/// Count trims belonging to a specification.
pub async fn count_by_spec<C: ConnectionTrait>(db: &C, spec_id: i32) -> AppResult<i32> {
    let count = Trim::find()
        .filter(trim::Column::SpecId.eq(spec_id))
        .count(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to count trims: {}", e)))?;

    Ok(count_to_i32(count))
}

/// Count suppliers whose trim belongs to a specification.
pub async fn count_suppliers_by_spec<C: ConnectionTrait>(db: &C, spec_id: i32) -> AppResult<i32> {
    let count = Supplier::find()
        .inner_join(Trim)
        .filter(trim::Column::SpecId.eq(spec_id))
        .count(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to count suppliers: {}", e)))?;

    Ok(count_to_i32(count))
}

/// Case-insensitive substring search over trim number and description.
pub async fn search<C: ConnectionTrait>(
    db: &C,
    term: &str,
    spec_id: Option<i32>,
) -> AppResult<Vec<trim::Model>> {
    let pattern = format!("%{}%", term.to_lowercase());

    let lower = |column: trim::Column| Expr::expr(Func::lower(Expr::col((Trim, column))));

    let mut select = Trim::find().filter(
        Condition::any()
            .add(lower(trim::Column::Number).like(pattern.as_str()))
            .add(lower(trim::Column::Description).like(pattern.as_str())),
    );

    if let Some(spec_id) = spec_id {
        select = select.filter(trim::Column::SpecId.eq(spec_id));
    }

    select
        .order_by_asc(trim::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to search trims: {}", e)))
}
