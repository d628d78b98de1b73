//! Database queries for export history.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::export::{self, ActiveModel, Entity as Export};
use crate::error::{AppError, AppResult};
use crate::models::NewExport;

/// Append an export audit row.
pub async fn insert<C: ConnectionTrait>(db: &C, new: NewExport) -> AppResult<export::Model> {
    let model = ActiveModel {
        spec_id: Set(Some(new.spec_id)),
        export_type: Set(new.export_type.as_str().to_string()),
        export_format: Set(new.export_format.as_str().to_string()),
        filename: Set(new.filename),
        file_path: Set(new.file_path),
        exported_at: Set(Utc::now()),
        exported_by: Set(new.exported_by),
        record_count: Set(new.record_count),
        ..Default::default()
    };

    model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert export: {}", e)))
}

/// Export history of a specification, most recent first.
pub async fn history<C: ConnectionTrait>(db: &C, spec_id: i32) -> AppResult<Vec<export::Model>> {
    Export::find()
        .filter(export::Column::SpecId.eq(spec_id))
        .order_by_desc(export::Column::ExportedAt)
        .order_by_desc(export::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get export history: {}", e)))
}

/// Get an export row by ID.
pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<export::Model>> {
    Export::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get export: {}", e)))
}
