//! Database queries for parsing logs.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::parsing_log::{self, ActiveModel, Entity as ParsingLog};
use crate::error::{AppError, AppResult};
use crate::models::LogLevel;

/// Append a parsing log entry for a specification.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
    level: LogLevel,
    message: &str,
    line_number: Option<i32>,
    context: Option<String>,
) -> AppResult<parsing_log::Model> {
    let model = ActiveModel {
        spec_id: Set(Some(spec_id)),
        log_level: Set(level.as_str().to_string()),
        message: Set(message.to_string()),
        line_number: Set(line_number),
        context: Set(context),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert parsing log: {}", e)))
}

/// Get the logs of a specification in the order they were written.
pub async fn list_by_spec<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
) -> AppResult<Vec<parsing_log::Model>> {
    ParsingLog::find()
        .filter(parsing_log::Column::SpecId.eq(spec_id))
        .order_by_asc(parsing_log::Column::Id)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get parsing logs: {}", e)))
}
