//! HTTP handler tests.

use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use actix_web::test;
use serde_json::json;
use tempfile::TempDir;

use trimspec_lib::db::specifications;

use super::test_helpers::*;

const BOUNDARY: &str = "----trimspec-test-boundary";

const TRIMS_CSV: &str = "Number,Description,UM,Supplier Name,Art No,Standard Cost (FOB),Lead Time With Greige\n\
ZIP-01,Metal zipper,PC,YKK,5VS,0.42,30\n\
ZIP-01,Metal zipper,PC,Riri,R1,N/A,\n\
BTN-02,Snap button,PC,,,,\n";

#[actix_rt::test]
async fn test_health_and_ready() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&pool, test_config(&dir)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "healthy");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/ready").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["database"], "connected");
}

#[actix_rt::test]
async fn test_upload_csv_imports_specification() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&pool, test_config(&dir)).await;

    let body = multipart_body(BOUNDARY, "fall/jacket.csv", TRIMS_CSV.as_bytes(), &[("created_by", "12")]);
    let req = test::TestRequest::post()
        .uri("/api/v1/specifications/upload")
        .insert_header((CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY)))
        .set_payload(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let spec = json_body(resp).await;
    assert_eq!(spec["status"], "parsed");
    assert_eq!(spec["original_filename"], "jacket.csv");
    assert_eq!(spec["file_type"], "csv");
    assert_eq!(spec["created_by"], 12);
    assert_eq!(spec["total_trims"], 2);
    assert_eq!(spec["total_suppliers"], 2);

    let stored = dir.path().join("uploads").join(spec["filename"].as_str().unwrap());
    assert_eq!(std::fs::read(stored).unwrap(), TRIMS_CSV.as_bytes());

    let id = spec["id"].as_i64().unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/specifications/{}/trims", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let trims = json_body(resp).await;
    assert_eq!(trims[0]["trim"]["number"], "ZIP-01");
    assert_eq!(trims[0]["suppliers"][1]["name"], "Riri");
    assert_eq!(trims[0]["suppliers"][1]["standard_cost_fob"], json!(null));
}

#[actix_rt::test]
async fn test_upload_unsupported_format_creates_nothing() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&pool, test_config(&dir)).await;

    let body = multipart_body(BOUNDARY, "spec.pdf", b"%PDF-1.4", &[]);
    let req = test::TestRequest::post()
        .uri("/api/v1/specifications/upload")
        .insert_header((CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY)))
        .set_payload(body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"], "UNSUPPORTED_FORMAT");

    let (_, total) = specifications::list(pool.connection(), 10, 0).await.unwrap();
    assert_eq!(total, 0);
}

#[actix_rt::test]
async fn test_import_data_endpoint_and_children() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "jacket.csv").await;
    let app = create_test_app(&pool, test_config(&dir)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/specifications/{}/data", spec.id))
        .set_json(serde_json::to_value(sample_payload()).unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["total_colors"], 1);
    assert_eq!(body["total_measurements"], 4);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/specifications/{}/color-bom", spec.id))
            .to_request(),
    )
    .await;
    let rows = json_body(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 3);
    assert_eq!(rows[1]["quantity"], 4);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/specifications/{}/measurements", spec.id))
            .to_request(),
    )
    .await;
    let rows = json_body(resp).await;
    assert_eq!(rows[1]["value"], "70-72");
}

#[actix_rt::test]
async fn test_failed_import_returns_500_and_logs() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "broken.csv").await;
    let app = create_test_app(&pool, test_config(&dir)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/specifications/{}/data", spec.id))
        .set_json(serde_json::to_value(failing_payload()).unwrap())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(resp).await["error"], "IMPORT_FAILED");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/specifications/{}", spec.id))
            .to_request(),
    )
    .await;
    let body = json_body(resp).await;
    assert_eq!(body["status"], "error");
    assert!(!body["error_message"].as_str().unwrap().is_empty());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/specifications/{}/logs", spec.id))
            .to_request(),
    )
    .await;
    let logs = json_body(resp).await;
    assert_eq!(logs[0]["log_level"], "error");
}

#[actix_rt::test]
async fn test_unknown_specification_is_404() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let app = create_test_app(&pool, test_config(&dir)).await;

    for uri in [
        "/api/v1/specifications/99",
        "/api/v1/specifications/99/trims",
        "/api/v1/specifications/99/logs",
        "/api/v1/specifications/99/exports",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/specifications/99")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["message"], "Specification 99 not found");
}

#[actix_rt::test]
async fn test_list_and_delete_specifications() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let first = create_spec(&pool, "a.csv").await;
    create_spec(&pool, "b.csv").await;
    let app = create_test_app(&pool, test_config(&dir)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/specifications?limit=1")
            .to_request(),
    )
    .await;
    let body = json_body(resp).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["limit"], 1);
    assert_eq!(body["specifications"][0]["original_filename"], "b.csv");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/v1/specifications/{}", first.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (_, total) = specifications::list(pool.connection(), 10, 0).await.unwrap();
    assert_eq!(total, 1);
}

#[actix_rt::test]
async fn test_search_endpoint() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "a.csv").await;
    trimspec_lib::services::save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();
    let app = create_test_app(&pool, test_config(&dir)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/trims/search?q=zip&spec_id={}", spec.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found = json_body(resp).await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["number"], "ZIP-01");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/trims/search?q=%20").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_export_endpoint_returns_attachment() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "jacket.csv").await;
    trimspec_lib::services::save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();
    let app = create_test_app(&pool, test_config(&dir)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/specifications/{}/exports", spec.id))
        .set_json(json!({"export_type": "trims_compact", "exported_by": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let disposition = resp
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("jacket_trims_compact_"));

    let csv = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(csv.contains("ZIP-01"));
    assert!(csv.contains("YKK; Riri"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/specifications/{}/exports", spec.id))
            .to_request(),
    )
    .await;
    let history = json_body(resp).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["export_type"], "trims_compact");
    assert_eq!(history[0]["exported_by"], 5);
    assert_eq!(history[0]["record_count"], 2);
}

#[actix_rt::test]
async fn test_xlsx_export_download() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "jacket.csv").await;
    trimspec_lib::services::save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();
    let app = create_test_app(&pool, test_config(&dir)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/specifications/{}/exports", spec.id))
        .set_json(json!({"export_type": "all", "export_format": "xlsx"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let export_id = resp
        .headers()
        .get("x-export-id")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    let exported = test::read_body(resp).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/exports/{}/download", export_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
    );
    let disposition = resp
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(disposition.contains("jacket_all_"));
    assert!(disposition.contains(".xlsx"));
    assert_eq!(test::read_body(resp).await, exported);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/exports/999/download")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_all_export_as_csv_is_rejected() {
    let pool = create_test_pool().await;
    let dir = TempDir::new().unwrap();
    let spec = create_spec(&pool, "jacket.csv").await;
    trimspec_lib::services::save_parsed_data(pool.connection(), spec.id, &sample_payload())
        .await
        .unwrap();
    let app = create_test_app(&pool, test_config(&dir)).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/specifications/{}/exports", spec.id))
        .set_json(json!({"export_type": "all"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
