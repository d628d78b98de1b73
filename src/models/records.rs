//! Normalized entity records produced from untyped rows.
//!
//! Text fields are never absent (empty string instead); numeric fields are
//! `None` when the source cell was missing or not a number.

use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrimRecord {
    pub number: String,
    pub description: String,
    pub um: String,
    pub fiber_content: String,
    pub fiber_content_back: String,
    pub material_coating: String,
    pub material_finish: String,
    pub material_laminate: String,
    pub trim_specific: String,
    pub suppliers: Vec<SupplierRecord>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierRecord {
    pub name: String,
    pub art_no: String,
    pub country: String,
    pub standard_cost_fob: Option<Decimal>,
    pub purchase_cost_cif: Option<Decimal>,
    pub lead_time_with_greige: Option<i32>,
    pub lead_time_without_greige: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorBomRecord {
    pub color_name: String,
    pub component_name: String,
    pub usage_details: String,
    pub sap_material_code: String,
    pub quantity: Option<i32>,
    pub placement: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementRecord {
    pub key: String,
    pub value: String,
    pub unit: String,
    pub size_variant: String,
}
