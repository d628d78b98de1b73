//! Specification file ingestion: upload bytes to a parsed specification.

use std::path::Path;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::{spec_files, specifications};
use crate::entity::specification;
use crate::error::{AppError, AppResult};
use crate::models::NewSpecification;

use super::assembly::assemble_payload;
use super::decoder::{FileKind, decode_sheets};
use super::import::save_parsed_data;

/// An uploaded specification file.
#[derive(Debug)]
pub struct UploadedFile {
    pub original_filename: String,
    pub bytes: Vec<u8>,
    pub created_by: Option<i32>,
}

/// Strip any client-side directory components from an uploaded name.
pub fn sanitize_filename(name: &str) -> String {
    name.rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim()
        .to_string()
}

/// Decode, store and import an uploaded specification.
///
/// Format and content are validated before any row is written, so a rejected
/// file leaves no specification behind. The stored file is removed when its
/// rows cannot be written. Once the row exists, an import failure leaves it in
/// `error` state.
pub async fn ingest_upload(
    db: &DatabaseConnection,
    uploads_dir: &Path,
    upload: UploadedFile,
) -> AppResult<specification::Model> {
    let original_filename = sanitize_filename(&upload.original_filename);
    if original_filename.is_empty() {
        return Err(AppError::InvalidInput("Uploaded file has no name".to_string()));
    }

    let kind = FileKind::from_filename(&original_filename)?;
    let sheets = decode_sheets(&upload.bytes, &original_filename)?;
    let payload = assemble_payload(&sheets)?;

    let stored_name = format!("{}.{}", Uuid::now_v7(), kind.as_str());
    tokio::fs::create_dir_all(uploads_dir)
        .await
        .map_err(|e| AppError::FileSystem(format!("Failed to create uploads directory: {}", e)))?;
    let stored_path = uploads_dir.join(&stored_name);
    tokio::fs::write(&stored_path, &upload.bytes)
        .await
        .map_err(|e| AppError::FileSystem(format!("Failed to store upload: {}", e)))?;

    let new_spec = NewSpecification {
        filename: stored_name,
        original_filename: original_filename.clone(),
        file_type: Some(kind.as_str().to_string()),
        file_size: Some(upload.bytes.len() as i64),
        created_by: upload.created_by,
    };
    let spec = match register_upload(db, new_spec, &stored_path).await {
        Ok(spec) => spec,
        Err(err) => {
            if let Err(e) = tokio::fs::remove_file(&stored_path).await {
                warn!(path = %stored_path.display(), "Failed to remove stored upload: {}", e);
            }
            return Err(err);
        }
    };

    info!(
        spec_id = spec.id,
        filename = %original_filename,
        size = upload.bytes.len(),
        "Specification uploaded"
    );

    save_parsed_data(db, spec.id, &payload).await
}

/// The specification row and its file record are written together.
async fn register_upload(
    db: &DatabaseConnection,
    new_spec: NewSpecification,
    stored_path: &Path,
) -> AppResult<specification::Model> {
    let txn = db
        .begin()
        .await
        .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

    let written = async {
        let spec = specifications::insert(&txn, new_spec).await?;
        spec_files::insert(&txn, spec.id, stored_path.to_string_lossy().into_owned()).await?;
        Ok::<_, AppError>(spec)
    }
    .await;

    match written {
        Ok(spec) => {
            txn.commit()
                .await
                .map_err(|e| AppError::Database(format!("Failed to commit upload: {}", e)))?;
            Ok(spec)
        }
        Err(err) => {
            if let Err(e) = txn.rollback().await {
                warn!("Failed to roll back upload: {}", e);
            }
            Err(err)
        }
    }
}
