//! Database queries for color BOM rows.

use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entity::color_bom::{self, ActiveModel, Entity as ColorBom};
use crate::error::{AppError, AppResult};
use crate::models::ColorBomRecord;

use super::count_to_i32;

/// Insert color BOM rows for a specification in one batch.
pub async fn insert_rows<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
    records: &[ColorBomRecord],
) -> AppResult<u64> {
    if records.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let models = records.iter().map(|r| ActiveModel {
        spec_id: Set(spec_id),
        color_name: Set(r.color_name.clone()),
        component_name: Set(r.component_name.clone()),
        usage_details: Set(r.usage_details.clone()),
        sap_material_code: Set(r.sap_material_code.clone()),
        quantity: Set(r.quantity),
        placement: Set(r.placement.clone()),
        created_at: Set(now),
        ..Default::default()
    });

    ColorBom::insert_many(models)
        .exec(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert color BOM rows: {}", e)))?;

    Ok(records.len() as u64)
}

/// Get all color BOM rows of a specification in insertion order.
pub async fn list_by_spec<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
) -> AppResult<Vec<color_bom::Model>> {
    ColorBom::find()
        .filter(color_bom::Column::SpecId.eq(spec_id))
        .order_by_asc(color_bom::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get color BOM: {}", e)))
}

/// Count distinct color names used by a specification.
pub async fn count_distinct_colors<C: ConnectionTrait>(db: &C, spec_id: i32) -> AppResult<i32> {
    let count = ColorBom::find()
        .select_only()
        .column(color_bom::Column::ColorName)
        .distinct()
        .filter(color_bom::Column::SpecId.eq(spec_id))
        .count(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to count colors: {}", e)))?;

    Ok(count_to_i32(count))
}
