//! Trim and supplier DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{supplier, trim};

/// Trim as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrimResponse {
    pub id: i32,
    pub spec_id: i32,
    pub number: String,
    pub description: String,
    pub um: String,
    pub fiber_content: String,
    pub fiber_content_back: String,
    pub material_coating: String,
    pub material_finish: String,
    pub material_laminate: String,
    pub trim_specific: String,
    pub created_at: DateTime<Utc>,
}

impl From<trim::Model> for TrimResponse {
    fn from(m: trim::Model) -> Self {
        Self {
            id: m.id,
            spec_id: m.spec_id,
            number: m.number,
            description: m.description,
            um: m.um,
            fiber_content: m.fiber_content,
            fiber_content_back: m.fiber_content_back,
            material_coating: m.material_coating,
            material_finish: m.material_finish,
            material_laminate: m.material_laminate,
            trim_specific: m.trim_specific,
            created_at: m.created_at,
        }
    }
}

/// Supplier as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SupplierResponse {
    pub id: i32,
    pub trim_id: i32,
    pub name: String,
    pub art_no: String,
    pub country: String,
    pub standard_cost_fob: Option<Decimal>,
    pub purchase_cost_cif: Option<Decimal>,
    pub lead_time_with_greige: Option<i32>,
    pub lead_time_without_greige: Option<i32>,
}

impl From<supplier::Model> for SupplierResponse {
    fn from(m: supplier::Model) -> Self {
        Self {
            id: m.id,
            trim_id: m.trim_id,
            name: m.name,
            art_no: m.art_no,
            country: m.country,
            standard_cost_fob: m.standard_cost_fob,
            purchase_cost_cif: m.purchase_cost_cif,
            lead_time_with_greige: m.lead_time_with_greige,
            lead_time_without_greige: m.lead_time_without_greige,
        }
    }
}

/// A trim joined with its suppliers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrimWithSuppliers {
    pub trim: TrimResponse,
    pub suppliers: Vec<SupplierResponse>,
}

/// Query parameters for trim search.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchTrimsQuery {
    /// Substring matched case-insensitively against number and description.
    pub q: String,
    /// Restrict the search to one specification.
    pub spec_id: Option<i32>,
}
