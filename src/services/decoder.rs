//! Tabular file decoding: CSV and Excel bytes into ordered row mappings.

use std::io::Cursor;

use calamine::{Data, Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use serde_json::{Number, Value};

use crate::error::{AppError, AppResult};
use crate::models::RowMap;

/// Supported upload formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Xlsx,
    Xls,
}

impl FileKind {
    /// Detect the format from a filename's extension (case-insensitive).
    pub fn from_filename(filename: &str) -> AppResult<Self> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "xls" => Ok(Self::Xls),
            "" => Err(AppError::UnsupportedFormat(format!(
                "'{}' has no file extension",
                filename
            ))),
            other => Err(AppError::UnsupportedFormat(format!(
                ".{} (expected .csv, .xlsx or .xls)",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
        }
    }
}

/// One decoded worksheet.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    /// Header labels in column order, trimmed.
    pub headers: Vec<String>,
    pub rows: Vec<RowMap>,
}

/// Decode every sheet of a file. CSV files yield a single sheet named after
/// the file stem.
pub fn decode_sheets(bytes: &[u8], filename: &str) -> AppResult<Vec<Sheet>> {
    match FileKind::from_filename(filename)? {
        FileKind::Csv => Ok(vec![decode_csv(bytes, sheet_name_from(filename))?]),
        FileKind::Xlsx => {
            let workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))
                .map_err(|e| AppError::InvalidInput(format!("Failed to read workbook: {}", e)))?;
            Ok(workbook_sheets(workbook))
        }
        FileKind::Xls => {
            let workbook: Xls<_> = Xls::new(Cursor::new(bytes.to_vec()))
                .map_err(|e| AppError::InvalidInput(format!("Failed to read workbook: {}", e)))?;
            Ok(workbook_sheets(workbook))
        }
    }
}

/// Decode the rows of the first sheet.
pub fn decode_rows(bytes: &[u8], filename: &str) -> AppResult<Vec<RowMap>> {
    Ok(decode_sheets(bytes, filename)?
        .into_iter()
        .next()
        .map(|sheet| sheet.rows)
        .unwrap_or_default())
}

fn sheet_name_from(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    base.rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(base)
        .to_string()
}

fn decode_csv(bytes: &[u8], name: String) -> AppResult<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = RowMap::new();

        for (idx, value) in record.iter().enumerate() {
            match headers.get(idx) {
                Some(header) if !header.is_empty() => {
                    row.insert(header.clone(), Value::String(value.trim().to_string()));
                }
                _ => {}
            }
        }

        if is_blank(&row) {
            continue;
        }
        rows.push(row);
    }

    Ok(Sheet {
        name,
        headers,
        rows,
    })
}

fn workbook_sheets<R: Reader<Cursor<Vec<u8>>>>(mut workbook: R) -> Vec<Sheet> {
    workbook
        .worksheets()
        .into_iter()
        .map(|(name, range)| {
            let mut rows_iter = range.rows();
            let headers: Vec<String> = rows_iter
                .next()
                .map(|header| header.iter().map(|c| c.to_string().trim().to_string()).collect())
                .unwrap_or_default();

            let rows = rows_iter
                .filter_map(|cells| {
                    let mut row = RowMap::new();
                    for (idx, cell) in cells.iter().enumerate() {
                        match headers.get(idx) {
                            Some(header) if !header.is_empty() => {
                                row.insert(header.clone(), cell_value(cell));
                            }
                            _ => {}
                        }
                    }
                    (!is_blank(&row)).then_some(row)
                })
                .collect();

            Sheet {
                name,
                headers,
                rows,
            }
        })
        .collect()
}

/// Numeric cells stay numbers so the normalizer sees them unformatted.
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::String(String::new()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(f.to_string())),
        Data::Bool(b) => Value::Bool(*b),
        other => Value::String(other.to_string().trim().to_string()),
    }
}

fn is_blank(row: &RowMap) -> bool {
    row.values().all(|v| match v {
        Value::String(s) => s.is_empty(),
        Value::Null => true,
        _ => false,
    })
}
