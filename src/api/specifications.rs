//! Specification API endpoints: upload, import, listing and child collections.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, delete, get, post, web};
use futures_util::StreamExt;
use tracing::info;

use crate::config::Config;
use crate::db::{DbPool, color_bom, measurements, parsing_logs, specifications};
use crate::error::{AppError, AppResult};
use crate::models::{
    ColorBomResponse, ListSpecificationsQuery, MeasurementResponse, ParsedSpecData,
    ParsingLogResponse, SpecificationListResponse, SpecificationResponse, TrimWithSuppliers,
};
use crate::services::{self, UploadedFile, catalog};

/// Configure specification routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_specification)
        .service(list_specifications)
        .service(import_specification_data)
        .service(get_specification_trims)
        .service(get_specification_color_bom)
        .service(get_specification_measurements)
        .service(get_specification_logs)
        .service(get_specification)
        .service(delete_specification);
}

/// Upload a specification file (CSV, XLSX or XLS) and import it.
///
/// POST /specifications/upload
///
/// Multipart fields: `file` (required), `created_by` (optional user ID).
#[utoipa::path(
    post,
    path = "/api/v1/specifications/upload",
    tag = "Specifications",
    request_body(content_type = "multipart/form-data", description = "Specification file"),
    responses(
        (status = 201, description = "Specification imported", body = SpecificationResponse),
        (status = 400, description = "Unsupported or unreadable file", body = crate::error::ErrorResponse),
        (status = 500, description = "Import failed", body = crate::error::ErrorResponse)
    )
)]
#[post("/specifications/upload")]
pub async fn upload_specification(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    mut payload: Multipart,
) -> AppResult<HttpResponse> {
    let upload = read_upload(&mut payload, config.max_upload_size).await?;
    let spec =
        services::ingest_upload(pool.connection(), &config.uploads_dir(), upload).await?;

    Ok(HttpResponse::Created().json(SpecificationResponse::from(spec)))
}

async fn read_upload(payload: &mut Multipart, max_upload_size: usize) -> AppResult<UploadedFile> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut created_by: Option<i32> = None;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidInput(format!("Multipart error: {}", e)))?;

        let (name, filename) = {
            let disposition = field
                .content_disposition()
                .ok_or_else(|| AppError::InvalidInput("Missing content disposition".to_string()))?;
            (
                disposition.get_name().unwrap_or_default().to_string(),
                disposition.get_filename().map(str::to_string),
            )
        };

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| AppError::InvalidInput(format!("Read error: {}", e)))?;
            if data.len() + chunk.len() > max_upload_size {
                return Err(AppError::InvalidInput(format!(
                    "File exceeds upload limit of {} bytes",
                    max_upload_size
                )));
            }
            data.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "file" => {
                let filename = filename.ok_or_else(|| {
                    AppError::InvalidInput("The 'file' field must carry a filename".to_string())
                })?;
                file = Some((filename, data));
            }
            "created_by" => {
                let text = String::from_utf8_lossy(&data);
                let text = text.trim();
                if !text.is_empty() {
                    created_by = Some(text.parse().map_err(|_| {
                        AppError::InvalidInput("created_by must be an integer".to_string())
                    })?);
                }
            }
            _ => {}
        }
    }

    let (original_filename, bytes) =
        file.ok_or_else(|| AppError::InvalidInput("Missing 'file' field".to_string()))?;

    Ok(UploadedFile {
        original_filename,
        bytes,
        created_by,
    })
}

/// Import parsed data into an existing specification.
///
/// POST /specifications/{id}/data
///
/// Not idempotent: every call appends rows.
#[utoipa::path(
    post,
    path = "/api/v1/specifications/{id}/data",
    tag = "Specifications",
    params(("id" = i32, Path, description = "Specification ID")),
    request_body = ParsedSpecData,
    responses(
        (status = 200, description = "Data imported", body = SpecificationResponse),
        (status = 404, description = "Specification not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Import failed", body = crate::error::ErrorResponse)
    )
)]
#[post("/specifications/{id}/data")]
pub async fn import_specification_data(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<ParsedSpecData>,
) -> AppResult<HttpResponse> {
    let spec = services::save_parsed_data(pool.connection(), path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(SpecificationResponse::from(spec)))
}

/// List specifications, newest upload first.
///
/// GET /specifications?limit=100&offset=0
#[utoipa::path(
    get,
    path = "/api/v1/specifications",
    tag = "Specifications",
    params(
        ("limit" = Option<u64>, Query, description = "Items per page (default: 100, max: 500)"),
        ("offset" = Option<u64>, Query, description = "Items to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "List of specifications", body = SpecificationListResponse)
    )
)]
#[get("/specifications")]
pub async fn list_specifications(
    pool: web::Data<DbPool>,
    query: web::Query<ListSpecificationsQuery>,
) -> AppResult<HttpResponse> {
    let limit = query.clamped_limit();
    let offset = query.offset();
    let (specs, total) = specifications::list(pool.connection(), limit, offset).await?;

    Ok(HttpResponse::Ok().json(SpecificationListResponse {
        specifications: specs.into_iter().map(SpecificationResponse::from).collect(),
        total,
        limit,
        offset,
    }))
}

/// Get a specification by ID.
#[utoipa::path(
    get,
    path = "/api/v1/specifications/{id}",
    tag = "Specifications",
    params(("id" = i32, Path, description = "Specification ID")),
    responses(
        (status = 200, description = "Specification details", body = SpecificationResponse),
        (status = 404, description = "Specification not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/specifications/{id}")]
pub async fn get_specification(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let spec = specifications::get(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SpecificationResponse::from(spec)))
}

/// Delete a specification and everything it owns. Export history survives
/// with its specification reference cleared.
#[utoipa::path(
    delete,
    path = "/api/v1/specifications/{id}",
    tag = "Specifications",
    params(("id" = i32, Path, description = "Specification ID")),
    responses(
        (status = 204, description = "Specification deleted"),
        (status = 404, description = "Specification not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/specifications/{id}")]
pub async fn delete_specification(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !specifications::delete(pool.connection(), id).await? {
        return Err(AppError::NotFound(format!("Specification {}", id)));
    }

    info!(spec_id = id, "Specification deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// Trims of a specification with their suppliers.
#[utoipa::path(
    get,
    path = "/api/v1/specifications/{id}/trims",
    tag = "Specifications",
    params(("id" = i32, Path, description = "Specification ID")),
    responses(
        (status = 200, description = "Trims with suppliers", body = Vec<TrimWithSuppliers>),
        (status = 404, description = "Specification not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/specifications/{id}/trims")]
pub async fn get_specification_trims(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let trims = catalog::trims_with_suppliers(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(trims))
}

/// Color BOM rows of a specification.
#[utoipa::path(
    get,
    path = "/api/v1/specifications/{id}/color-bom",
    tag = "Specifications",
    params(("id" = i32, Path, description = "Specification ID")),
    responses(
        (status = 200, description = "Color BOM rows", body = Vec<ColorBomResponse>),
        (status = 404, description = "Specification not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/specifications/{id}/color-bom")]
pub async fn get_specification_color_bom(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let conn = pool.connection();
    specifications::get(conn, id).await?;

    let rows: Vec<ColorBomResponse> = color_bom::list_by_spec(conn, id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

/// Measurements of a specification.
#[utoipa::path(
    get,
    path = "/api/v1/specifications/{id}/measurements",
    tag = "Specifications",
    params(("id" = i32, Path, description = "Specification ID")),
    responses(
        (status = 200, description = "Measurements", body = Vec<MeasurementResponse>),
        (status = 404, description = "Specification not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/specifications/{id}/measurements")]
pub async fn get_specification_measurements(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let conn = pool.connection();
    specifications::get(conn, id).await?;

    let rows: Vec<MeasurementResponse> = measurements::list_by_spec(conn, id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}

/// Parsing logs of a specification, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/specifications/{id}/logs",
    tag = "Specifications",
    params(("id" = i32, Path, description = "Specification ID")),
    responses(
        (status = 200, description = "Parsing logs", body = Vec<ParsingLogResponse>),
        (status = 404, description = "Specification not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/specifications/{id}/logs")]
pub async fn get_specification_logs(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let conn = pool.connection();
    specifications::get(conn, id).await?;

    let logs: Vec<ParsingLogResponse> = parsing_logs::list_by_spec(conn, id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(HttpResponse::Ok().json(logs))
}
