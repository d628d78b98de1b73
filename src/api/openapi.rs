//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trim Specification Server",
        version = "0.1.0",
        description = "API server for importing apparel trim specifications (CSV/Excel) and exporting their pivot views"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Specification endpoints
        api::specifications::upload_specification,
        api::specifications::import_specification_data,
        api::specifications::list_specifications,
        api::specifications::get_specification,
        api::specifications::delete_specification,
        api::specifications::get_specification_trims,
        api::specifications::get_specification_color_bom,
        api::specifications::get_specification_measurements,
        api::specifications::get_specification_logs,
        // Trim endpoints
        api::trims::search_trims,
        // Export endpoints
        api::exports::export_specification,
        api::exports::list_exports,
        api::exports::download_export,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Specifications
            models::SpecStatus,
            models::SpecStatistics,
            models::SpecificationResponse,
            models::SpecificationListResponse,
            models::ListSpecificationsQuery,
            models::ParsedSpecData,
            models::ColorBomResponse,
            models::MeasurementResponse,
            models::LogLevel,
            models::ParsingLogResponse,
            // Trims
            models::TrimResponse,
            models::SupplierResponse,
            models::TrimWithSuppliers,
            models::SearchTrimsQuery,
            // Exports
            models::ExportType,
            models::ExportFormat,
            models::CreateExportRequest,
            models::ExportResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Specifications", description = "Specification upload, import and browsing"),
        (name = "Trims", description = "Trim search"),
        (name = "Exports", description = "Export rendering and history")
    )
)]
pub struct ApiDoc;
