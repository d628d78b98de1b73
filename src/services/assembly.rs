//! Payload assembly: decoded sheets into the import payload.
//!
//! Sheets use the same column labels the exports write, so an exported file
//! can be uploaded again. Labels are matched case-insensitively.

use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{ParsedSpecData, RowMap};

use super::decoder::Sheet;

const TRIM_COLUMNS: &[(&str, &str)] = &[
    ("Number", "number"),
    ("Description", "description"),
    ("UM", "um"),
    ("Fiber Content", "fiberContent"),
    ("Fiber Content Back", "fiberContentBack"),
    ("Material Coating", "materialCoating"),
    ("Material Finish (Face)", "materialFinish"),
    ("Material Laminate", "materialLaminate"),
    ("Trim Specific", "trimSpecific"),
];

const SUPPLIER_COLUMNS: &[(&str, &str)] = &[
    ("Supplier Name", "name"),
    ("Art No", "artNo"),
    ("Country", "country"),
    ("Standard Cost (FOB)", "standardCostFOB"),
    ("Purchase Cost (CIF)", "purchaseCostCIF"),
    ("Lead Time With Greige", "leadTimeWithGreige"),
    ("Lead Time Without Greige", "leadTimeWithoutGreige"),
];

const COMPONENT_COLUMNS: &[(&str, &str)] = &[
    ("Component", "component"),
    ("Usage", "usage"),
    ("SAP Material Code", "sapMaterialCode"),
    ("Quantity", "quantity"),
    ("Placement", "placement"),
];

const MEASUREMENT_COLUMNS: &[(&str, &str)] = &[
    ("Key", "key"),
    ("Value", "value"),
    ("Unit", "unit"),
    ("Size Variant", "sizeVariant"),
];

/// What a sheet holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Trims,
    ColorBom,
    Measurements,
}

impl SheetKind {
    /// Classify by sheet name first, then by identifying headers.
    pub fn classify(sheet: &Sheet) -> Option<Self> {
        let name: String = sheet
            .name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match name.as_str() {
            "trims" | "trim" => return Some(Self::Trims),
            "colorbom" | "bom" => return Some(Self::ColorBom),
            "measurements" | "measurement" => return Some(Self::Measurements),
            _ => {}
        }

        let has = |label: &str| sheet.headers.iter().any(|h| h.eq_ignore_ascii_case(label));
        if has("Number") {
            Some(Self::Trims)
        } else if has("Color") && has("Component") {
            Some(Self::ColorBom)
        } else if has("Key") && has("Value") {
            Some(Self::Measurements)
        } else {
            None
        }
    }
}

/// Build the import payload from decoded sheets.
///
/// Fails when no sheet carries trims, color BOM or measurement columns.
pub fn assemble_payload(sheets: &[Sheet]) -> AppResult<ParsedSpecData> {
    let mut data = ParsedSpecData::default();

    for sheet in sheets {
        let Some(kind) = SheetKind::classify(sheet) else {
            continue;
        };
        let target = match kind {
            SheetKind::Trims => &mut data.trims,
            SheetKind::ColorBom => &mut data.color_bom,
            SheetKind::Measurements => &mut data.measurements,
        };
        let rows = match kind {
            SheetKind::Trims => group_trims(&sheet.rows),
            SheetKind::ColorBom => group_colors(&sheet.rows),
            SheetKind::Measurements => sheet
                .rows
                .iter()
                .filter(|row| !cell_text(row, "Key").is_empty())
                .map(|row| project(row, MEASUREMENT_COLUMNS))
                .collect(),
        };
        target.get_or_insert_with(Vec::new).extend(rows);
    }

    if data.trims.is_none() && data.color_bom.is_none() && data.measurements.is_none() {
        return Err(AppError::InvalidInput(
            "No trims, color BOM or measurement columns found in file".to_string(),
        ));
    }

    Ok(data)
}

/// Consecutive rows with the same `Number` form one trim; each row naming a
/// supplier adds that supplier. A row without a number continues the trim above.
fn group_trims(rows: &[RowMap]) -> Vec<RowMap> {
    let mut trims: Vec<(String, RowMap, Vec<Value>)> = Vec::new();

    for row in rows {
        let number = cell_text(row, "Number");
        let starts_new = match trims.last() {
            None => true,
            Some((current, _, _)) => !number.is_empty() && number != *current,
        };
        if starts_new {
            trims.push((number, project(row, TRIM_COLUMNS), Vec::new()));
        }

        if !cell_text(row, "Supplier Name").is_empty()
            && let Some((_, _, suppliers)) = trims.last_mut()
        {
            suppliers.push(Value::Object(project(row, SUPPLIER_COLUMNS)));
        }
    }

    trims
        .into_iter()
        .map(|(_, mut trim, suppliers)| {
            trim.insert("suppliers".to_string(), Value::Array(suppliers));
            trim
        })
        .collect()
}

/// Consecutive rows with the same `Color` form one color group.
fn group_colors(rows: &[RowMap]) -> Vec<RowMap> {
    let mut groups: Vec<(String, Vec<Value>)> = Vec::new();

    for row in rows {
        let color = cell_text(row, "Color");
        let starts_new = match groups.last() {
            None => true,
            Some((current, _)) => !color.is_empty() && color != *current,
        };
        if starts_new {
            groups.push((color, Vec::new()));
        }

        if !cell_text(row, "Component").is_empty()
            && let Some((_, components)) = groups.last_mut()
        {
            components.push(Value::Object(project(row, COMPONENT_COLUMNS)));
        }
    }

    groups
        .into_iter()
        .map(|(color, components)| {
            let mut group = RowMap::new();
            group.insert("colorName".to_string(), Value::String(color));
            group.insert("components".to_string(), Value::Array(components));
            group
        })
        .collect()
}

fn lookup<'a>(row: &'a RowMap, label: &str) -> Option<&'a Value> {
    row.iter()
        .find(|(key, _)| key.trim().eq_ignore_ascii_case(label))
        .map(|(_, value)| value)
}

fn cell_text(row: &RowMap, label: &str) -> String {
    match lookup(row, label) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Copy the labelled cells of a row under their payload field names.
fn project(row: &RowMap, columns: &[(&str, &str)]) -> RowMap {
    columns
        .iter()
        .filter_map(|(label, field)| {
            lookup(row, label).map(|value| (field.to_string(), value.clone()))
        })
        .collect()
}
