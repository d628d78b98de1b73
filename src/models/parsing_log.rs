//! Parsing log models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::parsing_log;

/// Severity of a parsing log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsing log entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParsingLogResponse {
    pub id: i32,
    pub log_level: String,
    pub message: String,
    pub line_number: Option<i32>,
    pub context: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<parsing_log::Model> for ParsingLogResponse {
    fn from(m: parsing_log::Model) -> Self {
        Self {
            id: m.id,
            log_level: m.log_level,
            message: m.message,
            line_number: m.line_number,
            context: m.context,
            created_at: m.created_at,
        }
    }
}
