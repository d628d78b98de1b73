//! Import orchestration: counters, status lifecycle, failure recording.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use tempfile::TempDir;

use trimspec_lib::db::{parsing_logs, specifications, trims};
use trimspec_lib::entity::{color_bom, specification, supplier, trim};
use trimspec_lib::error::AppError;
use trimspec_lib::models::{ParsedSpecData, SpecStatus};
use trimspec_lib::services::{UploadedFile, ingest_upload, recompute_statistics, save_parsed_data};

use super::test_helpers::*;

#[actix_rt::test]
async fn test_import_sets_counters_and_status() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "jacket.csv").await;
    assert_eq!(spec.status, SpecStatus::Uploaded.as_str());

    let saved = save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .expect("import succeeds");

    assert_eq!(saved.status, "parsed");
    assert_eq!(saved.total_trims, 2);
    assert_eq!(saved.total_suppliers, 2);
    assert_eq!(saved.total_colors, 1);
    assert_eq!(saved.total_measurements, 4);
    assert!(saved.parsed_date.is_some());
    assert!(saved.error_message.is_none());

    // Counters match a fresh recount
    let stats = recompute_statistics(pool.connection(), spec.id).await.unwrap();
    assert_eq!(stats.total_trims, saved.total_trims);
    assert_eq!(stats.total_suppliers, saved.total_suppliers);
    assert_eq!(stats.total_colors, saved.total_colors);
    assert_eq!(stats.total_measurements, saved.total_measurements);
}

#[actix_rt::test]
async fn test_import_normalizes_supplier_fields() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "jacket.csv").await;
    save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();

    let conn = pool.connection();
    let zip = trims::list_by_spec(conn, spec.id).await.unwrap().remove(0);
    assert_eq!(zip.number, "ZIP-01");
    assert_eq!(zip.fiber_content, "Brass");
    assert_eq!(zip.material_coating, "");

    let suppliers = trims::list_suppliers(conn, zip.id).await.unwrap();
    assert_eq!(suppliers.len(), 2);
    assert_eq!(suppliers[0].name, "YKK");
    assert_eq!(
        suppliers[0].standard_cost_fob.map(|d| d.round_dp(6).to_string()),
        Some("0.42".to_string())
    );
    assert_eq!(suppliers[0].lead_time_with_greige, Some(30));
    assert_eq!(suppliers[1].standard_cost_fob, None);
    assert_eq!(suppliers[1].lead_time_with_greige, None);
    assert_eq!(suppliers[1].art_no, "");
}

#[actix_rt::test]
async fn test_import_missing_specification() {
    let pool = create_test_pool().await;

    let err = save_parsed_data(pool.connection(), 999, &sample_payload())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(trim::Entity::find().count(pool.connection()).await.unwrap(), 0);
}

#[actix_rt::test]
async fn test_failed_import_records_error_and_rolls_back() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "broken.csv").await;

    let err = save_parsed_data(pool.connection(), spec.id, &failing_payload())
        .await
        .unwrap_err();
    let AppError::ImportFailed(message) = err else {
        panic!("expected ImportFailed, got {:?}", err);
    };
    assert!(message.contains("suppliers"));

    let conn = pool.connection();
    let stored = specifications::get(conn, spec.id).await.unwrap();
    assert_eq!(stored.status, "error");
    assert_eq!(stored.error_message.as_deref(), Some(message.as_str()));

    let logs = parsing_logs::list_by_spec(conn, spec.id).await.unwrap();
    assert!(
        logs.iter()
            .any(|log| log.log_level == "error" && log.message == message)
    );

    // The first trim was written before the failure and rolled back with it
    assert_eq!(trim::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(supplier::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(stored.total_trims, 0);
}

#[actix_rt::test]
async fn test_storage_rejection_records_error_and_rolls_back() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "jacket.csv").await;
    let conn = pool.connection();
    // Measurements are written last, after trims and color BOM succeeded
    conn.execute_unprepared("DROP TABLE spec_measurements")
        .await
        .unwrap();

    let err = save_parsed_data(conn, spec.id, &sample_payload())
        .await
        .unwrap_err();
    let AppError::ImportFailed(message) = err else {
        panic!("expected ImportFailed, got {:?}", err);
    };
    assert!(message.contains("measurements"));

    let stored = specifications::get(conn, spec.id).await.unwrap();
    assert_eq!(stored.status, "error");
    assert_eq!(stored.error_message.as_deref(), Some(message.as_str()));
    assert!(stored.parsed_date.is_none());

    let logs = parsing_logs::list_by_spec(conn, spec.id).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].log_level, "error");
    assert_eq!(logs[0].message, message);

    assert_eq!(trim::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(supplier::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(color_bom::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(stored.total_trims, 0);
    assert_eq!(stored.total_colors, 0);
}

#[actix_rt::test]
async fn test_upload_leaves_nothing_when_file_record_fails() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let conn = pool.connection();
    conn.execute_unprepared("DROP TABLE spec_files")
        .await
        .unwrap();

    let err = ingest_upload(
        conn,
        dir.path(),
        UploadedFile {
            original_filename: "measurements.csv".to_string(),
            bytes: b"Key,Value,Unit\nChest,52,cm\n".to_vec(),
            created_by: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Database(_)));
    assert_eq!(specification::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[actix_rt::test]
async fn test_reimport_after_error_clears_message() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "retry.csv").await;

    save_parsed_data(pool.connection(), spec.id, &failing_payload())
        .await
        .unwrap_err();
    let saved = save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();

    assert_eq!(saved.status, "parsed");
    assert!(saved.error_message.is_none());
    assert_eq!(saved.total_trims, 2);
}

#[actix_rt::test]
async fn test_import_is_not_idempotent() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "twice.csv").await;

    save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();
    let saved = save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();

    assert_eq!(saved.total_trims, 4);
    assert_eq!(saved.total_suppliers, 4);
    // Same color name twice is still one distinct color
    assert_eq!(saved.total_colors, 1);
    assert_eq!(saved.total_measurements, 8);
}

#[actix_rt::test]
async fn test_import_with_absent_collections() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "empty.csv").await;

    let saved = save_parsed_data(pool.connection(), spec.id, &ParsedSpecData::default())
        .await
        .unwrap();

    assert_eq!(saved.status, "parsed");
    assert_eq!(saved.total_trims, 0);
    assert_eq!(saved.total_colors, 0);
}

#[actix_rt::test]
async fn test_successful_import_writes_info_log() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "logged.csv").await;
    save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();

    let logs = parsing_logs::list_by_spec(pool.connection(), spec.id)
        .await
        .unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].log_level, "info");
    assert!(logs[0].message.starts_with("Imported 2 trims"));
}
