//! Specification lifecycle: creation, listing, file records, cascading delete.

use sea_orm::{EntityTrait, PaginatorTrait};
use tempfile::TempDir;

use trimspec_lib::db::{exports, spec_files, specifications};
use trimspec_lib::entity::{color_bom, measurement, parsing_log, spec_file, supplier, trim};
use trimspec_lib::models::{ExportFormat, ExportType};
use trimspec_lib::services::export::create_export;
use trimspec_lib::services::save_parsed_data;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_create_and_get_specification() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "coat.xlsx").await;

    let fetched = specifications::get(pool.connection(), spec.id).await.unwrap();
    assert_eq!(fetched.original_filename, "coat.xlsx");
    assert_eq!(fetched.status, "uploaded");
    assert_eq!(fetched.created_by, Some(7));
    assert_eq!(fetched.total_trims, 0);
    assert!(fetched.parsed_date.is_none());

    assert!(
        specifications::find_by_id(pool.connection(), spec.id + 1)
            .await
            .unwrap()
            .is_none()
    );
}

#[actix_rt::test]
async fn test_list_specifications_newest_first() {
    let pool = create_test_pool().await;
    let first = create_spec(&pool, "a.csv").await;
    let second = create_spec(&pool, "b.csv").await;
    let third = create_spec(&pool, "c.csv").await;

    let (page, total) = specifications::list(pool.connection(), 2, 0).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(
        page.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![third.id, second.id]
    );

    let (page, _) = specifications::list(pool.connection(), 2, 2).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, first.id);
}

#[actix_rt::test]
async fn test_single_file_record_per_specification() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "a.csv").await;
    let conn = pool.connection();

    spec_files::insert(conn, spec.id, "/data/uploads/a.csv".to_string())
        .await
        .unwrap();
    assert!(
        spec_files::insert(conn, spec.id, "/data/uploads/b.csv".to_string())
            .await
            .is_err()
    );

    let file = spec_files::find_by_spec(conn, spec.id).await.unwrap().unwrap();
    assert_eq!(file.file_path.as_deref(), Some("/data/uploads/a.csv"));
    assert_eq!(file.storage_type, "filesystem");
}

#[actix_rt::test]
async fn test_delete_cascades_and_keeps_export_history() {
    let pool = create_test_pool().await;
    let data_dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "doomed.csv").await;
    let conn = pool.connection();

    save_parsed_data(conn, spec.id, &sample_payload()).await.unwrap();
    spec_files::insert(conn, spec.id, "/data/uploads/doomed.csv".to_string())
        .await
        .unwrap();
    let rendered = create_export(
        conn,
        data_dir.path(),
        spec.id,
        ExportType::Trims,
        ExportFormat::Csv,
        Some(7),
    )
    .await
    .unwrap();

    assert!(specifications::delete(conn, spec.id).await.unwrap());

    assert!(specifications::find_by_id(conn, spec.id).await.unwrap().is_none());
    assert_eq!(trim::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(supplier::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(color_bom::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(measurement::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(parsing_log::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(spec_file::Entity::find().count(conn).await.unwrap(), 0);

    let export = exports::find_by_id(conn, rendered.record.id)
        .await
        .unwrap()
        .expect("export history survives");
    assert_eq!(export.spec_id, None);
    assert_eq!(export.record_count, 3);
}

#[actix_rt::test]
async fn test_delete_missing_specification() {
    let pool = create_test_pool().await;
    assert!(!specifications::delete(pool.connection(), 42).await.unwrap());
}

#[actix_rt::test]
async fn test_delete_trim_removes_its_suppliers() {
    let pool = create_test_pool().await;
    let spec = create_spec(&pool, "t.csv").await;
    let conn = pool.connection();
    save_parsed_data(conn, spec.id, &sample_payload()).await.unwrap();

    let zip = trimspec_lib::db::trims::list_by_spec(conn, spec.id)
        .await
        .unwrap()
        .remove(0);
    let deleted = trim::Entity::delete_by_id(zip.id).exec(conn).await.unwrap();
    assert_eq!(deleted.rows_affected, 1);

    assert_eq!(supplier::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(trim::Entity::find().count(conn).await.unwrap(), 1);
}
