//! Export endpoints: render a specification view and browse export history.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, get, post, web};

use crate::config::Config;
use crate::db::{DbPool, exports, specifications};
use crate::error::{AppError, AppResult};
use crate::models::{CreateExportRequest, ExportFormat, ExportResponse};
use crate::services::export::create_export;

/// Header carrying the ID of the recorded export row.
pub const EXPORT_ID_HEADER: &str = "X-Export-Id";

/// Configure export routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(export_specification)
        .service(list_exports)
        .service(download_export);
}

/// Export one view of a specification as a file download.
#[utoipa::path(
    post,
    path = "/api/v1/specifications/{id}/exports",
    tag = "Exports",
    params(("id" = i32, Path, description = "Specification ID")),
    request_body = CreateExportRequest,
    responses(
        (status = 200, description = "Export file (CSV or XLSX)"),
        (status = 400, description = "Nothing to export", body = crate::error::ErrorResponse),
        (status = 404, description = "Specification not found", body = crate::error::ErrorResponse)
    )
)]
#[post("/specifications/{id}/exports")]
pub async fn export_specification(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    path: web::Path<i32>,
    body: web::Json<CreateExportRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    let rendered = create_export(
        pool.connection(),
        &config.exports_dir(),
        path.into_inner(),
        request.export_type,
        request.export_format,
        request.exported_by,
    )
    .await?;

    Ok(HttpResponse::Ok()
        .content_type(rendered.content_type)
        .insert_header(attachment(&rendered.record.filename))
        .insert_header((EXPORT_ID_HEADER, rendered.record.id.to_string()))
        .body(rendered.bytes))
}

fn attachment(filename: &str) -> ContentDisposition {
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(filename.to_string())],
    }
}

/// Export history of a specification, most recent first.
#[utoipa::path(
    get,
    path = "/api/v1/specifications/{id}/exports",
    tag = "Exports",
    params(("id" = i32, Path, description = "Specification ID")),
    responses(
        (status = 200, description = "Export history", body = Vec<ExportResponse>),
        (status = 404, description = "Specification not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/specifications/{id}/exports")]
pub async fn list_exports(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let conn = pool.connection();
    specifications::get(conn, id).await?;

    let history: Vec<ExportResponse> = exports::history(conn, id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(HttpResponse::Ok().json(history))
}

/// Download a previously written export file.
#[utoipa::path(
    get,
    path = "/api/v1/exports/{id}/download",
    tag = "Exports",
    params(("id" = i32, Path, description = "Export ID")),
    responses(
        (status = 200, description = "Export file"),
        (status = 404, description = "Export or its file not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/exports/{id}/download")]
pub async fn download_export(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let export = exports::find_by_id(pool.connection(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Export {}", id)))?;

    let file_path = export
        .file_path
        .as_deref()
        .ok_or_else(|| AppError::NotFound(format!("File of export {}", id)))?;
    let bytes = match tokio::fs::read(file_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("File of export {}", id)));
        }
        Err(e) => {
            return Err(AppError::FileSystem(format!("Failed to read export: {}", e)));
        }
    };

    let content_type = ExportFormat::parse(&export.export_format)
        .map(|format| format.content_type())
        .unwrap_or("application/octet-stream");

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(attachment(&export.filename))
        .body(bytes))
}
