//! Aggregate counters for a specification.

use sea_orm::ConnectionTrait;

use crate::db::{color_bom, measurements, trims};
use crate::error::AppResult;
use crate::models::SpecStatistics;

/// Recount every dependent collection of a specification.
///
/// Always a full recount, so the result is correct even after partial writes.
pub async fn recompute_statistics<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
) -> AppResult<SpecStatistics> {
    Ok(SpecStatistics {
        total_trims: trims::count_by_spec(db, spec_id).await?,
        total_suppliers: trims::count_suppliers_by_spec(db, spec_id).await?,
        total_colors: color_bom::count_distinct_colors(db, spec_id).await?,
        total_measurements: measurements::count_by_spec(db, spec_id).await?,
    })
}
