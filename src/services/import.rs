//! Import orchestration: persisting a parsed payload for a specification.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::{error, info, warn};

use crate::db::{color_bom, measurements, parsing_logs, specifications, trims};
use crate::entity::specification;
use crate::error::{AppError, AppResult};
use crate::models::{LogLevel, ParsedSpecData, SpecStatus};

use super::normalizer;
use super::statistics::recompute_statistics;

/// Persist a parsed payload for an existing specification.
///
/// The specification moves to `parsing` (committed immediately), then every
/// collection, the counter recount and the `parsed` transition are written in
/// one transaction. On failure that transaction is rolled back, the
/// specification is moved to `error` with the message stored, an error log is
/// appended and `ImportFailed` is returned.
///
/// Not idempotent: importing the same payload twice duplicates every row.
pub async fn save_parsed_data(
    db: &DatabaseConnection,
    spec_id: i32,
    data: &ParsedSpecData,
) -> AppResult<specification::Model> {
    specifications::get(db, spec_id).await?;
    specifications::update_status(db, spec_id, SpecStatus::Parsing).await?;

    match import_in_transaction(db, spec_id, data).await {
        Ok(spec) => {
            info!(
                spec_id,
                trims = spec.total_trims,
                suppliers = spec.total_suppliers,
                colors = spec.total_colors,
                measurements = spec.total_measurements,
                "Specification imported"
            );
            Ok(spec)
        }
        Err(err) => {
            let message = failure_message(&err);
            error!(spec_id, error = %message, "Specification import failed");
            record_failure(db, spec_id, &message).await;
            Err(AppError::ImportFailed(message))
        }
    }
}

async fn import_in_transaction(
    db: &DatabaseConnection,
    spec_id: i32,
    data: &ParsedSpecData,
) -> AppResult<specification::Model> {
    let txn = db
        .begin()
        .await
        .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

    match write_payload(&txn, spec_id, data).await {
        Ok(spec) => {
            txn.commit()
                .await
                .map_err(|e| AppError::Database(format!("Failed to commit import: {}", e)))?;
            Ok(spec)
        }
        Err(err) => {
            if let Err(e) = txn.rollback().await {
                warn!(spec_id, "Failed to roll back import: {}", e);
            }
            Err(err)
        }
    }
}

/// Trims first (each followed by its suppliers), then color BOM, then
/// measurements, then counters and status.
async fn write_payload(
    txn: &DatabaseTransaction,
    spec_id: i32,
    data: &ParsedSpecData,
) -> AppResult<specification::Model> {
    if let Some(rows) = &data.trims {
        for row in rows {
            let record = normalizer::normalize_trim(row)?;
            let trim = trims::insert_trim(txn, spec_id, &record).await?;
            trims::insert_suppliers(txn, trim.id, &record.suppliers).await?;
        }
    }

    if let Some(groups) = &data.color_bom {
        let mut records = Vec::new();
        for group in groups {
            records.extend(normalizer::normalize_color_group(group)?);
        }
        color_bom::insert_rows(txn, spec_id, &records).await?;
    }

    if let Some(rows) = &data.measurements {
        let records: Vec<_> = rows.iter().map(normalizer::normalize_measurement).collect();
        measurements::insert_rows(txn, spec_id, &records).await?;
    }

    let stats = recompute_statistics(txn, spec_id).await?;

    parsing_logs::insert(
        txn,
        spec_id,
        LogLevel::Info,
        &format!(
            "Imported {} trims, {} suppliers, {} colors, {} measurements",
            stats.total_trims, stats.total_suppliers, stats.total_colors, stats.total_measurements
        ),
        None,
        None,
    )
    .await?;

    specifications::mark_parsed(txn, spec_id, stats).await
}

/// The stored message is the underlying cause, without the variant prefix.
fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Database(msg)
        | AppError::InvalidInput(msg)
        | AppError::ImportFailed(msg)
        | AppError::FileSystem(msg)
        | AppError::UnsupportedFormat(msg) => msg.clone(),
        AppError::NotFound(_) => err.to_string(),
    }
}

/// Failure bookkeeping runs on the pool after rollback. Its own errors are
/// logged, not returned, so the caller sees the import failure.
async fn record_failure(db: &DatabaseConnection, spec_id: i32, message: &str) {
    if let Err(e) = specifications::mark_failed(db, spec_id, message).await {
        error!(spec_id, "Failed to store import error state: {}", e);
    }
    if let Err(e) = parsing_logs::insert(db, spec_id, LogLevel::Error, message, None, None).await {
        error!(spec_id, "Failed to write import error log: {}", e);
    }
}
