//! Database queries for specifications.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};

use crate::entity::specification::{self as spec, ActiveModel, Entity as Specification};
use crate::error::{AppError, AppResult};
use crate::models::{NewSpecification, SpecStatistics, SpecStatus};

/// Insert a new specification in `uploaded` state.
pub async fn insert<C: ConnectionTrait>(db: &C, new: NewSpecification) -> AppResult<spec::Model> {
    let now = Utc::now();

    let model = ActiveModel {
        filename: Set(new.filename),
        original_filename: Set(new.original_filename),
        file_type: Set(new.file_type),
        file_size: Set(new.file_size),
        upload_date: Set(now),
        parsed_date: Set(None),
        status: Set(SpecStatus::Uploaded.as_str().to_string()),
        error_message: Set(None),
        total_trims: Set(0),
        total_suppliers: Set(0),
        total_colors: Set(0),
        total_measurements: Set(0),
        created_by: Set(new.created_by),
        updated_at: Set(now),
        ..Default::default()
    };

    model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert specification: {}", e)))
}

/// Get a specification by ID.
pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<spec::Model>> {
    Specification::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get specification: {}", e)))
}

/// Get a specification by ID or fail with NotFound.
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<spec::Model> {
    find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Specification {}", id)))
}

/// List specifications, newest upload first.
pub async fn list<C: ConnectionTrait>(
    db: &C,
    limit: u64,
    offset: u64,
) -> AppResult<(Vec<spec::Model>, u64)> {
    let select = Specification::find();

    let total = select
        .clone()
        .count(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to count specifications: {}", e)))?;

    let specs = select
        .order_by_desc(spec::Column::UploadDate)
        .order_by_desc(spec::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list specifications: {}", e)))?;

    Ok((specs, total))
}

/// Update the status, leaving the error message untouched.
pub async fn update_status<C: ConnectionTrait>(
    db: &C,
    id: i32,
    status: SpecStatus,
) -> AppResult<spec::Model> {
    let mut active: ActiveModel = get(db, id).await?.into();
    active.status = Set(status.as_str().to_string());
    active.updated_at = Set(Utc::now());

    active
        .update(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to update specification status: {}", e)))
}

/// Move a specification to `error` and store the failure message.
pub async fn mark_failed<C: ConnectionTrait>(
    db: &C,
    id: i32,
    error_message: &str,
) -> AppResult<spec::Model> {
    let mut active: ActiveModel = get(db, id).await?.into();
    active.status = Set(SpecStatus::Error.as_str().to_string());
    active.error_message = Set(Some(error_message.to_string()));
    active.updated_at = Set(Utc::now());

    active
        .update(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to mark specification failed: {}", e)))
}

/// Store recomputed counters, move to `parsed` and refresh the parse timestamp.
pub async fn mark_parsed<C: ConnectionTrait>(
    db: &C,
    id: i32,
    stats: SpecStatistics,
) -> AppResult<spec::Model> {
    let now = Utc::now();
    let mut active: ActiveModel = get(db, id).await?.into();
    active.total_trims = Set(stats.total_trims);
    active.total_suppliers = Set(stats.total_suppliers);
    active.total_colors = Set(stats.total_colors);
    active.total_measurements = Set(stats.total_measurements);
    active.status = Set(SpecStatus::Parsed.as_str().to_string());
    active.error_message = Set(None);
    active.parsed_date = Set(Some(now));
    active.updated_at = Set(now);

    active
        .update(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to mark specification parsed: {}", e)))
}

/// Delete a specification. Dependent rows go with it through the foreign keys;
/// export history keeps its rows with `spec_id` set to NULL.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<bool> {
    let result = Specification::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to delete specification: {}", e)))?;

    Ok(result.rows_affected > 0)
}
