//! Health, readiness, metrics and API documentation endpoints

use actix_web::http::StatusCode;
use restaurant_api::testing::TestApp;
use serde_json::Value;

// =============================================================================
// LIVENESS
// =============================================================================

#[actix_web::test]
async fn test_health_endpoint_returns_200_ok() {
    let app = TestApp::spawn().await.unwrap();

    for path in ["/health", "/live"] {
        let mut res = app.get(path).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{} should always return 200", path);

        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].as_str().unwrap().contains('T'));
    }
}

// =============================================================================
// READINESS
// =============================================================================

#[actix_web::test]
async fn test_ready_endpoint_reports_database() {
    let app = TestApp::spawn().await.unwrap();

    let mut res = app.get("/ready").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "connected");
}

#[actix_web::test]
async fn test_health_db_endpoint_reports_version() {
    let app = TestApp::spawn().await.unwrap();

    let mut res = app.get("/health/db").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["database"], "connected");
}

// =============================================================================
// METRICS AND DOCUMENTATION
// =============================================================================

#[actix_web::test]
async fn test_metrics_endpoint_counts_requests() {
    let app = TestApp::spawn().await.unwrap();
    app.get("/api/restaurant/100/dish").send().await.unwrap();

    let mut res = app.get("/metrics").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.body().await.unwrap();
    let body = std::str::from_utf8(&body).unwrap();

    assert!(body.contains("http_requests_total"));
    assert!(body.contains("/api/restaurant/{restaurant_id}/dish"));
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let app = TestApp::spawn().await.unwrap();

    let mut res = app.get("/api.json").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert!(body["paths"]["/api/restaurant/{restaurant_id}/dish"].is_object());
    assert!(body["components"]["securitySchemes"]["token"].is_object());
}
