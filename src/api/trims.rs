//! Trim search endpoint.

use actix_web::{HttpResponse, get, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{SearchTrimsQuery, TrimResponse};
use crate::services::catalog;

/// Configure trim routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(search_trims);
}

/// Search trims by number or description.
///
/// GET /trims/search?q=zip&spec_id=1
#[utoipa::path(
    get,
    path = "/api/v1/trims/search",
    tag = "Trims",
    params(
        ("q" = String, Query, description = "Case-insensitive substring"),
        ("spec_id" = Option<i32>, Query, description = "Restrict to one specification")
    ),
    responses(
        (status = 200, description = "Matching trims", body = Vec<TrimResponse>),
        (status = 400, description = "Empty search term", body = crate::error::ErrorResponse)
    )
)]
#[get("/trims/search")]
pub async fn search_trims(
    pool: web::Data<DbPool>,
    query: web::Query<SearchTrimsQuery>,
) -> AppResult<HttpResponse> {
    if query.q.trim().is_empty() {
        return Err(AppError::InvalidInput("Search term must not be empty".to_string()));
    }

    let trims = catalog::search_trims(pool.connection(), &query.q, query.spec_id).await?;
    Ok(HttpResponse::Ok().json(trims))
}
