//! Specification domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::specification;

/// Specification processing status.
///
/// `uploaded` is set at creation; the import orchestrator moves it to
/// `parsing` and then to `parsed` or `error`. Any state may re-enter `parsing`
/// on a later import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SpecStatus {
    Uploaded,
    Parsing,
    Parsed,
    Error,
}

impl SpecStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Parsing => "parsing",
            Self::Parsed => "parsed",
            Self::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "uploaded" => Some(Self::Uploaded),
            "parsing" => Some(Self::Parsing),
            "parsed" => Some(Self::Parsed),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata for a new specification row.
#[derive(Debug, Clone)]
pub struct NewSpecification {
    pub filename: String,
    pub original_filename: String,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub created_by: Option<i32>,
}

/// Derived counters for one specification, always a full recount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SpecStatistics {
    pub total_trims: i32,
    pub total_suppliers: i32,
    pub total_colors: i32,
    pub total_measurements: i32,
}

/// Specification as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpecificationResponse {
    pub id: i32,
    pub filename: String,
    pub original_filename: String,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub upload_date: DateTime<Utc>,
    pub parsed_date: Option<DateTime<Utc>>,
    pub status: String,
    pub error_message: Option<String>,
    pub total_trims: i32,
    pub total_suppliers: i32,
    pub total_colors: i32,
    pub total_measurements: i32,
    pub created_by: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl From<specification::Model> for SpecificationResponse {
    fn from(m: specification::Model) -> Self {
        Self {
            id: m.id,
            filename: m.filename,
            original_filename: m.original_filename,
            file_type: m.file_type,
            file_size: m.file_size,
            upload_date: m.upload_date,
            parsed_date: m.parsed_date,
            status: m.status,
            error_message: m.error_message,
            total_trims: m.total_trims,
            total_suppliers: m.total_suppliers,
            total_colors: m.total_colors,
            total_measurements: m.total_measurements,
            created_by: m.created_by,
            updated_at: m.updated_at,
        }
    }
}

/// Paginated specification list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpecificationListResponse {
    pub specifications: Vec<SpecificationResponse>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Query parameters for listing specifications.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListSpecificationsQuery {
    /// Results per page (default 100, max 500).
    pub limit: Option<u64>,
    /// Pagination offset.
    pub offset: Option<u64>,
}

impl ListSpecificationsQuery {
    pub fn clamped_limit(&self) -> u64 {
        self.limit.unwrap_or(100).clamp(1, 500)
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}
