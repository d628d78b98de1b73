//! Color BOM and measurement DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{color_bom, measurement};

/// Color BOM row as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColorBomResponse {
    pub id: i32,
    pub color_name: String,
    pub component_name: String,
    pub usage_details: String,
    pub sap_material_code: String,
    pub quantity: Option<i32>,
    pub placement: String,
}

impl From<color_bom::Model> for ColorBomResponse {
    fn from(m: color_bom::Model) -> Self {
        Self {
            id: m.id,
            color_name: m.color_name,
            component_name: m.component_name,
            usage_details: m.usage_details,
            sap_material_code: m.sap_material_code,
            quantity: m.quantity,
            placement: m.placement,
        }
    }
}

/// Measurement as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeasurementResponse {
    pub id: i32,
    pub key: String,
    pub value: String,
    pub unit: String,
    pub size_variant: String,
}

impl From<measurement::Model> for MeasurementResponse {
    fn from(m: measurement::Model) -> Self {
        Self {
            id: m.id,
            key: m.measurement_key,
            value: m.measurement_value,
            unit: m.unit,
            size_variant: m.size_variant,
        }
    }
}
