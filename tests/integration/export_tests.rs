//! Export rendering and history.

use sea_orm::ConnectionTrait;
use tempfile::TempDir;

use trimspec_lib::db::exports;
use trimspec_lib::error::AppError;
use trimspec_lib::models::{ExportFormat, ExportType};
use trimspec_lib::services::export::create_export;
use trimspec_lib::services::{assemble_payload, decode_sheets, save_parsed_data};

use super::test_helpers::*;

#[actix_rt::test]
async fn test_export_writes_file_and_records_history() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "jacket.csv").await;
    save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();

    let rendered = create_export(
        pool.connection(),
        dir.path(),
        spec.id,
        ExportType::Measurements,
        ExportFormat::Csv,
        Some(3),
    )
    .await
    .unwrap();

    let csv = String::from_utf8(rendered.bytes.clone()).unwrap();
    assert!(csv.starts_with("Key,Value,Unit,Size Variant\n"));
    assert!(csv.contains("Length,70-72,cm,M"));
    assert_eq!(rendered.content_type, "text/csv; charset=utf-8");

    let record = &rendered.record;
    assert_eq!(record.spec_id, Some(spec.id));
    assert_eq!(record.export_type, "measurements");
    assert_eq!(record.export_format, "csv");
    assert_eq!(record.exported_by, Some(3));
    assert_eq!(record.record_count, 4);
    assert!(record.filename.starts_with("jacket_measurements_"));
    assert!(record.filename.ends_with(".csv"));

    let path = record.file_path.as_deref().unwrap();
    assert_eq!(std::fs::read(path).unwrap(), rendered.bytes);
}

#[actix_rt::test]
async fn test_export_history_newest_first() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "jacket.csv").await;
    save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();

    let mut ids = Vec::new();
    for export_type in [
        ExportType::Trims,
        ExportType::TrimsCompact,
        ExportType::ColorBom,
    ] {
        let rendered = create_export(
            pool.connection(),
            dir.path(),
            spec.id,
            export_type,
            ExportFormat::Csv,
            None,
        )
        .await
        .unwrap();
        ids.push(rendered.record.id);
    }

    let history = exports::history(pool.connection(), spec.id).await.unwrap();
    ids.reverse();
    assert_eq!(history.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
    assert_eq!(history[0].export_type, "color_bom");
    assert_eq!(history[0].record_count, 3);
    assert_eq!(history[1].record_count, 2);
    assert_eq!(history[2].record_count, 3);
}

#[actix_rt::test]
async fn test_export_of_empty_collection_is_rejected() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "bare.csv").await;

    let err = create_export(
        pool.connection(),
        dir.path(),
        spec.id,
        ExportType::ColorBom,
        ExportFormat::Csv,
        None,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(exports::history(pool.connection(), spec.id).await.unwrap().is_empty());
}

#[actix_rt::test]
async fn test_export_missing_specification() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();

    let err = create_export(
        pool.connection(),
        dir.path(),
        77,
        ExportType::Trims,
        ExportFormat::Csv,
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[actix_rt::test]
async fn test_trims_export_reimports_to_same_counts() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let source = create_spec(&pool, "source.csv").await;
    save_parsed_data(pool.connection(), source.id, &sample_payload())
        .await
        .unwrap();

    let rendered = create_export(
        pool.connection(),
        dir.path(),
        source.id,
        ExportType::Trims,
        ExportFormat::Csv,
        None,
    )
    .await
    .unwrap();

    let sheets = decode_sheets(&rendered.bytes, &rendered.record.filename).unwrap();
    let payload = assemble_payload(&sheets).unwrap();
    let copy = create_spec(&pool, "copy.csv").await;
    let saved = save_parsed_data(pool.connection(), copy.id, &payload)
        .await
        .unwrap();

    assert_eq!(saved.total_trims, 2);
    assert_eq!(saved.total_suppliers, 2);
}

#[actix_rt::test]
async fn test_all_xlsx_export_reimports_to_same_counts() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let source = create_spec(&pool, "source.xlsx").await;
    let original = save_parsed_data(pool.connection(), source.id, &sample_payload())
        .await
        .unwrap();

    let rendered = create_export(
        pool.connection(),
        dir.path(),
        source.id,
        ExportType::All,
        ExportFormat::Xlsx,
        None,
    )
    .await
    .unwrap();
    assert_eq!(rendered.record.export_type, "all");
    assert_eq!(rendered.record.export_format, "xlsx");
    assert!(rendered.record.filename.ends_with(".xlsx"));
    // 3 trim rows + 3 color BOM rows + 4 measurement rows
    assert_eq!(rendered.record.record_count, 10);

    let sheets = decode_sheets(&rendered.bytes, &rendered.record.filename).unwrap();
    let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Trims", "Color BOM", "Measurements"]);

    let payload = assemble_payload(&sheets).unwrap();
    let copy = create_spec(&pool, "copy.xlsx").await;
    let saved = save_parsed_data(pool.connection(), copy.id, &payload)
        .await
        .unwrap();

    assert_eq!(saved.total_trims, original.total_trims);
    assert_eq!(saved.total_suppliers, original.total_suppliers);
    assert_eq!(saved.total_colors, original.total_colors);
    assert_eq!(saved.total_measurements, original.total_measurements);
}

#[actix_rt::test]
async fn test_all_export_skips_empty_sheets() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "partial.xlsx").await;
    let payload: trimspec_lib::models::ParsedSpecData = serde_json::from_value(serde_json::json!({
        "measurements": [{"key": "Chest", "value": "52", "unit": "cm"}]
    }))
    .unwrap();
    save_parsed_data(pool.connection(), spec.id, &payload)
        .await
        .unwrap();

    let rendered = create_export(
        pool.connection(),
        dir.path(),
        spec.id,
        ExportType::All,
        ExportFormat::Xlsx,
        None,
    )
    .await
    .unwrap();

    let sheets = decode_sheets(&rendered.bytes, "partial.xlsx").unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].name, "Measurements");
    assert_eq!(rendered.record.record_count, 1);
}

#[actix_rt::test]
async fn test_export_file_removed_when_history_write_fails() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "jacket.csv").await;
    save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();
    pool.connection()
        .execute_unprepared("DROP TABLE spec_exports")
        .await
        .unwrap();

    let err = create_export(
        pool.connection(),
        dir.path(),
        spec.id,
        ExportType::Measurements,
        ExportFormat::Csv,
        None,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Database(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
