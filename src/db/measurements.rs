//! Database queries for measurements.

use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::measurement::{self, ActiveModel, Entity as Measurement};
use crate::error::{AppError, AppResult};
use crate::models::MeasurementRecord;

use super::count_to_i32;

/// Insert measurements for a specification in one batch.
pub async fn insert_rows<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
    records: &[MeasurementRecord],
) -> AppResult<u64> {
    if records.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let models = records.iter().map(|r| ActiveModel {
        spec_id: Set(spec_id),
        measurement_key: Set(r.key.clone()),
        measurement_value: Set(r.value.clone()),
        unit: Set(r.unit.clone()),
        size_variant: Set(r.size_variant.clone()),
        created_at: Set(now),
        ..Default::default()
    });

    Measurement::insert_many(models)
        .exec(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert measurements: {}", e)))?;

    Ok(records.len() as u64)
}

/// Get all measurements of a specification in insertion order.
pub async fn list_by_spec<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
) -> AppResult<Vec<measurement::Model>> {
    Measurement::find()
        .filter(measurement::Column::SpecId.eq(spec_id))
        .order_by_asc(measurement::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get measurements: {}", e)))
}

/// Count measurements belonging to a specification.
pub async fn count_by_spec<C: ConnectionTrait>(db: &C, spec_id: i32) -> AppResult<i32> {
    let count = Measurement::find()
        .filter(measurement::Column::SpecId.eq(spec_id))
        .count(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to count measurements: {}", e)))?;

    Ok(count_to_i32(count))
}
