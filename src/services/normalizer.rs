//! Row normalization: untyped parser rows into entity records.
//!
//! Coercion is soft. A cell that cannot be converted becomes `None` (numbers)
//! or an empty string (text) and the import carries on. Only structural
//! problems, such as a `suppliers` value that is not a list, are errors.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{ColorBomRecord, MeasurementRecord, RowMap, SupplierRecord, TrimRecord};

/// Fractional digits kept for money columns (`DECIMAL(10, 6)`).
pub const DECIMAL_SCALE: u32 = 6;

/// Coerce a cell to a fixed-point decimal.
///
/// Missing keys, nulls, empty strings and non-numeric content all yield `None`.
pub fn safe_decimal(value: Option<&Value>) -> Option<Decimal> {
    let parsed = match value? {
        Value::String(s) => parse_decimal(s.trim()),
        Value::Number(n) => parse_decimal(&n.to_string()),
        _ => None,
    };

    if parsed.is_none() {
        debug!(value = ?value, "Decimal coercion failed, storing absent value");
    }
    parsed.map(|d| d.round_dp(DECIMAL_SCALE))
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Coerce a cell to an integer.
///
/// Strings must hold a whole number ("14", not "14.5"). Numeric cells with a
/// fractional part are truncated toward zero; values outside `i32` are absent.
pub fn safe_int(value: Option<&Value>) -> Option<i32> {
    let parsed = match value? {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                s.parse::<i32>().ok()
            }
        }
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => n
                .as_f64()
                .filter(|f| f.is_finite())
                .map(f64::trunc)
                .filter(|f| *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
                .map(|f| f as i32),
        },
        _ => None,
    };

    if parsed.is_none() {
        debug!(value = ?value, "Integer coercion failed, storing absent value");
    }
    parsed
}

/// Read a text field, defaulting to an empty string.
pub fn text(row: &RowMap, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Read a nested list of rows. Absent or null means empty.
fn nested_rows<'a>(row: &'a RowMap, key: &str, owner: &str) -> AppResult<Vec<&'a RowMap>> {
    match row.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_object().ok_or_else(|| {
                    AppError::InvalidInput(format!("{} '{}' entries must be objects", owner, key))
                })
            })
            .collect(),
        Some(_) => Err(AppError::InvalidInput(format!(
            "{} '{}' must be a list",
            owner, key
        ))),
    }
}

/// Map one supplier row.
pub fn normalize_supplier(row: &RowMap) -> SupplierRecord {
    SupplierRecord {
        name: text(row, "name"),
        art_no: text(row, "artNo"),
        country: text(row, "country"),
        standard_cost_fob: safe_decimal(row.get("standardCostFOB")),
        purchase_cost_cif: safe_decimal(row.get("purchaseCostCIF")),
        lead_time_with_greige: safe_int(row.get("leadTimeWithGreige")),
        lead_time_without_greige: safe_int(row.get("leadTimeWithoutGreige")),
    }
}

/// Map one trim row together with its nested suppliers.
pub fn normalize_trim(row: &RowMap) -> AppResult<TrimRecord> {
    let suppliers = nested_rows(row, "suppliers", "Trim")?
        .into_iter()
        .map(normalize_supplier)
        .collect();

    Ok(TrimRecord {
        number: text(row, "number"),
        description: text(row, "description"),
        um: text(row, "um"),
        fiber_content: text(row, "fiberContent"),
        fiber_content_back: text(row, "fiberContentBack"),
        material_coating: text(row, "materialCoating"),
        material_finish: text(row, "materialFinish"),
        material_laminate: text(row, "materialLaminate"),
        trim_specific: text(row, "trimSpecific"),
        suppliers,
    })
}

/// Expand one color group into a BOM row per component.
pub fn normalize_color_group(group: &RowMap) -> AppResult<Vec<ColorBomRecord>> {
    let color_name = text(group, "colorName");

    Ok(nested_rows(group, "components", "Color group")?
        .into_iter()
        .map(|component| ColorBomRecord {
            color_name: color_name.clone(),
            component_name: text(component, "component"),
            usage_details: text(component, "usage"),
            sap_material_code: text(component, "sapMaterialCode"),
            quantity: safe_int(component.get("quantity")),
            placement: text(component, "placement"),
        })
        .collect())
}

/// Map one measurement row. The value stays text.
pub fn normalize_measurement(row: &RowMap) -> MeasurementRecord {
    MeasurementRecord {
        key: text(row, "key"),
        value: text(row, "value"),
        unit: text(row, "unit"),
        size_variant: text(row, "sizeVariant"),
    }
}
