//! Export rendering and history recording.
//!
//! An export flattens one view of a specification into tables, renders them
//! as CSV or as an XLSX workbook, writes the file under the exports directory
//! and appends an audit row.

use std::path::Path;

use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook};
use sea_orm::ConnectionTrait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::{color_bom, exports, measurements, specifications};
use crate::entity::{color_bom as color_bom_entity, export, measurement};
use crate::error::{AppError, AppResult};
use crate::models::{ExportFormat, ExportType, NewExport, TrimWithSuppliers};

use super::catalog;

pub const TRIMS_SHEET: &str = "Trims";
pub const COLOR_BOM_SHEET: &str = "Color BOM";
pub const MEASUREMENTS_SHEET: &str = "Measurements";

const TRIM_HEADERS: &[&str] = &[
    "Number",
    "Description",
    "UM",
    "Fiber Content",
    "Fiber Content Back",
    "Material Coating",
    "Material Finish (Face)",
    "Material Laminate",
    "Trim Specific",
];

const SUPPLIER_HEADERS: &[&str] = &[
    "Supplier Name",
    "Art No",
    "Country",
    "Standard Cost (FOB)",
    "Purchase Cost (CIF)",
    "Lead Time With Greige",
    "Lead Time Without Greige",
];

/// A rendered table ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Result of a completed export.
#[derive(Debug)]
pub struct RenderedExport {
    pub record: export::Model,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn trim_cells(item: &TrimWithSuppliers) -> Vec<String> {
    let t = &item.trim;
    vec![
        t.number.clone(),
        t.description.clone(),
        t.um.clone(),
        t.fiber_content.clone(),
        t.fiber_content_back.clone(),
        t.material_coating.clone(),
        t.material_finish.clone(),
        t.material_laminate.clone(),
        t.trim_specific.clone(),
    ]
}

fn headers(groups: &[&[&str]]) -> Vec<String> {
    groups
        .iter()
        .flat_map(|g| g.iter().map(|h| h.to_string()))
        .collect()
}

/// One row per supplier; a trim without suppliers gets one row with empty
/// supplier cells.
pub fn trims_table(items: &[TrimWithSuppliers]) -> ExportTable {
    let mut rows = Vec::new();

    for item in items {
        if item.suppliers.is_empty() {
            let mut row = trim_cells(item);
            row.extend(std::iter::repeat_n(String::new(), SUPPLIER_HEADERS.len()));
            rows.push(row);
            continue;
        }

        for s in &item.suppliers {
            let mut row = trim_cells(item);
            row.extend([
                s.name.clone(),
                s.art_no.clone(),
                s.country.clone(),
                opt(s.standard_cost_fob.map(|d| d.normalize())),
                opt(s.purchase_cost_cif.map(|d| d.normalize())),
                opt(s.lead_time_with_greige),
                opt(s.lead_time_without_greige),
            ]);
            rows.push(row);
        }
    }

    ExportTable {
        headers: headers(&[TRIM_HEADERS, SUPPLIER_HEADERS]),
        rows,
    }
}

/// One row per trim with supplier names joined.
pub fn trims_compact_table(items: &[TrimWithSuppliers]) -> ExportTable {
    let rows = items
        .iter()
        .map(|item| {
            let mut row = trim_cells(item);
            let names: Vec<&str> = item
                .suppliers
                .iter()
                .map(|s| s.name.as_str())
                .filter(|n| !n.is_empty())
                .collect();
            row.push(names.join("; "));
            row.push(item.suppliers.len().to_string());
            row
        })
        .collect();

    ExportTable {
        headers: headers(&[TRIM_HEADERS, &["Suppliers", "Supplier Count"]]),
        rows,
    }
}

pub fn color_bom_table(rows: &[color_bom_entity::Model]) -> ExportTable {
    ExportTable {
        headers: headers(&[&[
            "Color",
            "Component",
            "Usage",
            "SAP Material Code",
            "Quantity",
            "Placement",
        ]]),
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.color_name.clone(),
                    r.component_name.clone(),
                    r.usage_details.clone(),
                    r.sap_material_code.clone(),
                    opt(r.quantity),
                    r.placement.clone(),
                ]
            })
            .collect(),
    }
}

pub fn measurements_table(rows: &[measurement::Model]) -> ExportTable {
    ExportTable {
        headers: headers(&[&["Key", "Value", "Unit", "Size Variant"]]),
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.measurement_key.clone(),
                    r.measurement_value.clone(),
                    r.unit.clone(),
                    r.size_variant.clone(),
                ]
            })
            .collect(),
    }
}

/// Encode a table as CSV with a header row.
pub fn render_csv(table: &ExportTable) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::InvalidInput(format!("Failed to finish CSV: {}", e)))
}

/// Encode tables as an XLSX workbook, one worksheet per table with a bold
/// header row. Empty cells are left blank.
pub fn render_xlsx(sheets: &[ExportSheet]) -> AppResult<Vec<u8>> {
    let xlsx_err = |e: rust_xlsxwriter::XlsxError| {
        AppError::FileSystem(format!("Failed to render workbook: {}", e))
    };
    let too_large = || AppError::InvalidInput("Export is too large for a worksheet".to_string());

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name).map_err(xlsx_err)?;

        for (col, header) in sheet.table.headers.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| too_large())?;
            worksheet
                .write_string_with_format(0, col, header.as_str(), &bold)
                .map_err(xlsx_err)?;
        }

        for (idx, row) in sheet.table.rows.iter().enumerate() {
            let row_num = u32::try_from(idx + 1).map_err(|_| too_large())?;
            for (col, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let col = u16::try_from(col).map_err(|_| too_large())?;
                worksheet
                    .write_string(row_num, col, cell.as_str())
                    .map_err(xlsx_err)?;
            }
        }
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}

/// A table with the worksheet name it is written under.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSheet {
    pub name: &'static str,
    pub table: ExportTable,
}

impl ExportSheet {
    fn new(name: &'static str, table: ExportTable) -> Self {
        Self { name, table }
    }
}

/// Load the tables behind one export type.
///
/// `All` yields the trims, color BOM and measurement sheets, skipping any
/// that have no rows.
pub async fn build_sheets<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
    export_type: ExportType,
) -> AppResult<Vec<ExportSheet>> {
    Ok(match export_type {
        ExportType::Trims => vec![ExportSheet::new(
            TRIMS_SHEET,
            trims_table(&catalog::trims_with_suppliers(db, spec_id).await?),
        )],
        ExportType::TrimsCompact => vec![ExportSheet::new(
            TRIMS_SHEET,
            trims_compact_table(&catalog::trims_with_suppliers(db, spec_id).await?),
        )],
        ExportType::ColorBom => vec![ExportSheet::new(
            COLOR_BOM_SHEET,
            color_bom_table(&color_bom::list_by_spec(db, spec_id).await?),
        )],
        ExportType::Measurements => vec![ExportSheet::new(
            MEASUREMENTS_SHEET,
            measurements_table(&measurements::list_by_spec(db, spec_id).await?),
        )],
        ExportType::All => [
            ExportSheet::new(
                TRIMS_SHEET,
                trims_table(&catalog::trims_with_suppliers(db, spec_id).await?),
            ),
            ExportSheet::new(
                COLOR_BOM_SHEET,
                color_bom_table(&color_bom::list_by_spec(db, spec_id).await?),
            ),
            ExportSheet::new(
                MEASUREMENTS_SHEET,
                measurements_table(&measurements::list_by_spec(db, spec_id).await?),
            ),
        ]
        .into_iter()
        .filter(|sheet| !sheet.table.rows.is_empty())
        .collect(),
    })
}

/// Render an export, write it to `exports_dir` and record it in the history.
///
/// The file is removed again when the audit row cannot be written.
pub async fn create_export<C: ConnectionTrait>(
    db: &C,
    exports_dir: &Path,
    spec_id: i32,
    export_type: ExportType,
    export_format: ExportFormat,
    exported_by: Option<i32>,
) -> AppResult<RenderedExport> {
    if export_type == ExportType::All && export_format != ExportFormat::Xlsx {
        return Err(AppError::InvalidInput(
            "The all export is only available as xlsx".to_string(),
        ));
    }

    let spec = specifications::get(db, spec_id).await?;
    let sheets = build_sheets(db, spec_id, export_type).await?;

    let row_count: usize = sheets.iter().map(|sheet| sheet.table.rows.len()).sum();
    if row_count == 0 {
        return Err(AppError::InvalidInput(format!(
            "Specification {} has no {} data to export",
            spec_id,
            export_type.as_str()
        )));
    }

    let bytes = match export_format {
        ExportFormat::Csv => match sheets.as_slice() {
            [sheet] => render_csv(&sheet.table)?,
            _ => {
                return Err(AppError::InvalidInput(
                    "A CSV export holds exactly one table".to_string(),
                ));
            }
        },
        ExportFormat::Xlsx => render_xlsx(&sheets)?,
    };

    let stem = spec
        .original_filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(&spec.original_filename);
    let filename = format!(
        "{}_{}_{}.{}",
        stem,
        export_type.as_str(),
        Utc::now().format("%Y%m%d_%H%M%S"),
        export_format.extension()
    );

    tokio::fs::create_dir_all(exports_dir)
        .await
        .map_err(|e| AppError::FileSystem(format!("Failed to create exports directory: {}", e)))?;
    let file_path = exports_dir.join(format!("{}_{}", Uuid::now_v7(), filename));
    tokio::fs::write(&file_path, &bytes)
        .await
        .map_err(|e| AppError::FileSystem(format!("Failed to write export: {}", e)))?;

    let record_count = i32::try_from(row_count).unwrap_or(i32::MAX);
    let inserted = exports::insert(
        db,
        NewExport {
            spec_id,
            export_type,
            export_format,
            filename,
            file_path: Some(file_path.to_string_lossy().into_owned()),
            exported_by,
            record_count,
        },
    )
    .await;

    let record = match inserted {
        Ok(record) => record,
        Err(err) => {
            if let Err(e) = tokio::fs::remove_file(&file_path).await {
                warn!(spec_id, path = %file_path.display(), "Failed to remove export file: {}", e);
            }
            return Err(err);
        }
    };

    info!(
        spec_id,
        export_id = record.id,
        export_type = export_type.as_str(),
        export_format = export_format.as_str(),
        record_count,
        "Export written"
    );

    Ok(RenderedExport {
        record,
        content_type: export_format.content_type(),
        bytes,
    })
}
