//! Export request/response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::export;

/// Which view of a specification is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExportType {
    /// One row per supplier (trim-only row when a trim has none).
    Trims,
    /// One row per trim with supplier names joined.
    TrimsCompact,
    ColorBom,
    Measurements,
    /// Trims, color BOM and measurements as separate worksheets (XLSX only).
    All,
}

impl ExportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trims => "trims",
            Self::TrimsCompact => "trims_compact",
            Self::ColorBom => "color_bom",
            Self::Measurements => "measurements",
            Self::All => "all",
        }
    }
}

/// Output format of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    /// Parse a stored format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

/// Request body for creating an export.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateExportRequest {
    pub export_type: ExportType,
    #[serde(default)]
    pub export_format: ExportFormat,
    /// User performing the export.
    pub exported_by: Option<i32>,
}

/// Export audit row to insert.
#[derive(Debug, Clone)]
pub struct NewExport {
    pub spec_id: i32,
    pub export_type: ExportType,
    pub export_format: ExportFormat,
    pub filename: String,
    pub file_path: Option<String>,
    pub exported_by: Option<i32>,
    pub record_count: i32,
}

/// Export history entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExportResponse {
    pub id: i32,
    pub spec_id: Option<i32>,
    pub export_type: String,
    pub export_format: String,
    pub filename: String,
    pub file_path: Option<String>,
    pub exported_at: DateTime<Utc>,
    pub exported_by: Option<i32>,
    pub record_count: i32,
}

impl From<export::Model> for ExportResponse {
    fn from(m: export::Model) -> Self {
        Self {
            id: m.id,
            spec_id: m.spec_id,
            export_type: m.export_type,
            export_format: m.export_format,
            filename: m.filename,
            file_path: m.file_path,
            exported_at: m.exported_at,
            exported_by: m.exported_by,
            record_count: m.record_count,
        }
    }
}
