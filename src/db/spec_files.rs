//! Database queries for stored specification files.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entity::spec_file::{self, ActiveModel, Entity as SpecFile};
use crate::error::{AppError, AppResult};

/// Storage backend recorded for files written to the data directory.
pub const STORAGE_FILESYSTEM: &str = "filesystem";

/// Record where the original upload of a specification is stored.
///
/// A specification has at most one file record; a second insert fails on the
/// unique `spec_id` constraint.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
    file_path: String,
) -> AppResult<spec_file::Model> {
    let model = ActiveModel {
        spec_id: Set(spec_id),
        file_path: Set(Some(file_path)),
        file_content: Set(None),
        storage_type: Set(STORAGE_FILESYSTEM.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert spec file: {}", e)))
}

/// Get the file record of a specification.
pub async fn find_by_spec<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
) -> AppResult<Option<spec_file::Model>> {
    SpecFile::find()
        .filter(spec_file::Column::SpecId.eq(spec_id))
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get spec file: {}", e)))
}
