//! Parsed specification payload handed to the import orchestrator.
//!
//! Rows stay untyped (`RowMap`) until the normalizer maps them; field names
//! follow the parser's camelCase convention (`fiberContent`, `standardCostFOB`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One untyped row: field name to scalar value.
pub type RowMap = Map<String, Value>;

/// Structured payload with three optional collections.
///
/// Each trim row may carry a nested `suppliers` list; each color group carries
/// `colorName` and a nested `components` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ParsedSpecData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub trims: Option<Vec<RowMap>>,
    #[serde(rename = "colorBOM", default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub color_bom: Option<Vec<RowMap>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub measurements: Option<Vec<RowMap>>,
}

impl ParsedSpecData {
    pub fn is_empty(&self) -> bool {
        self.trims.as_ref().is_none_or(|t| t.is_empty())
            && self.color_bom.as_ref().is_none_or(|c| c.is_empty())
            && self.measurements.as_ref().is_none_or(|m| m.is_empty())
    }
}
