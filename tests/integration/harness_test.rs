//! Guarantees of the test harness itself

use actix_web::http::StatusCode;
use restaurant_api::entities::v1::restaurants;
use restaurant_api::testing::{HarnessConfig, StoreKind, TestApp, factory};
use rust_decimal_macros::dec;
use sea_orm::{EntityTrait, PaginatorTrait};

#[actix_web::test]
async fn test_seeded_rows_are_visible_to_the_api() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Seeded")).await.unwrap();
    let dish = app
        .seed(factory::dish(restaurant.id, "Seeded", dec!(3.5)))
        .await
        .unwrap();

    assert!(restaurant.id > 0);
    assert!(dish.id > 0);

    let res = app
        .get(&format!("/api/restaurant/{}/dish/{}", restaurant.id, dish.id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_harnesses_are_isolated() {
    let first = TestApp::spawn().await.unwrap();
    let second = TestApp::spawn().await.unwrap();

    assert_ne!(first.store_name(), second.store_name());
    assert!(first.store_name().starts_with("restaurant_"));

    let restaurant = first.seed(factory::restaurant("Only Here")).await.unwrap();

    let res = second
        .get(&format!("/api/restaurant/{}", restaurant.id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let count = restaurants::Entity::find().count(second.db()).await.unwrap();
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn test_failed_seed_leaves_nothing_behind() {
    let app = TestApp::spawn().await.unwrap();

    let result = app.seed(factory::dish(100, "Orphan", dec!(1))).await;
    assert!(result.is_err(), "A dish needs an existing restaurant");

    let restaurant = app.seed(factory::restaurant_with_id(100, "Late")).await.unwrap();

    let mut res = app
        .get(&format!("/api/restaurant/{}", restaurant.id))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["dishes"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_builder_accepts_explicit_config() {
    let app = TestApp::builder()
        .config(HarnessConfig {
            store: StoreKind::Memory,
            ..HarnessConfig::default()
        })
        .build()
        .await
        .unwrap();

    let res = app.get("/health").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_url_store_is_migrated() {
    let name = format!("harness_url_{}", uuid::Uuid::new_v4().simple());
    let url = format!("sqlite:file:{}?mode=memory&cache=shared", name);

    let app = TestApp::builder()
        .store(StoreKind::Url(url.clone()))
        .build()
        .await
        .unwrap();

    assert_eq!(app.store_name(), url);

    let res = app.get("/api/restaurant").send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_shutdown_stops_the_server() {
    let app = TestApp::spawn().await.unwrap();
    let url = app.url("/health");

    app.shutdown().await;

    let result = awc::Client::default().get(url).send().await;
    assert!(result.is_err(), "Server should no longer accept connections");
}
