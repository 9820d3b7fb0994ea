//! Restaurant resource under `/api/restaurant`

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use restaurant_api::entities::v1::dishes;
use restaurant_api::responses::v1::restaurant::{
    Restaurant, RestaurantDetail, RestaurantPaginationResponse,
};
use restaurant_api::testing::{TestApp, factory};
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

// =============================================================================
// GET /api/restaurant
// =============================================================================

#[actix_web::test]
async fn test_paginate_restaurants() {
    let app = TestApp::spawn().await.unwrap();
    for name in ["Bistro", "Cantina", "Diner", "Alehouse", "Eatery"] {
        app.seed(factory::restaurant(name)).await.unwrap();
    }

    let mut res = app
        .get("/api/restaurant?page=2&limit=2")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let body: RestaurantPaginationResponse = res.json().await.unwrap();
    let names: Vec<_> = body.data.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(body.total, 5);
    assert_eq!(body.page, 2);
    assert_eq!(body.pages, 3);
    assert_eq!(names, vec!["Cantina", "Diner"]);
}

#[actix_web::test]
async fn test_paginate_restaurants_descending() {
    let app = TestApp::spawn().await.unwrap();
    for name in ["Bistro", "Cantina", "Alehouse"] {
        app.seed(factory::restaurant(name)).await.unwrap();
    }

    let mut res = app
        .get("/api/restaurant?order=name&sort=desc")
        .send()
        .await
        .unwrap();
    let body: RestaurantPaginationResponse = res.json().await.unwrap();
    let names: Vec<_> = body.data.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["Cantina", "Bistro", "Alehouse"]);
}

#[actix_web::test]
async fn test_paginate_restaurants_with_search() {
    let app = TestApp::spawn().await.unwrap();
    app.seed(factory::restaurant("Pizza Place")).await.unwrap();
    app.seed(factory::restaurant("Pizza Express")).await.unwrap();
    app.seed(factory::restaurant("Sushi Bar")).await.unwrap();

    let mut res = app
        .get("/api/restaurant?search=Pizza")
        .send()
        .await
        .unwrap();
    let body: RestaurantPaginationResponse = res.json().await.unwrap();

    assert_eq!(body.total, 2);
    assert!(body.data.iter().all(|r| r.name.starts_with("Pizza")));
}

#[actix_web::test]
async fn test_paginate_restaurants_rejects_invalid_query() {
    let app = TestApp::spawn().await.unwrap();

    for query in [
        "limit=0",
        "limit=101",
        "page=0",
        "page=abc",
        "sort=sideways",
        "page=18446744073709551615&limit=10",
        "page=922337203685477582&limit=10",
    ] {
        let res = app
            .get(&format!("/api/restaurant?{}", query))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query: {}", query);
    }
}

// =============================================================================
// GET /api/restaurant/{id}
// =============================================================================

#[actix_web::test]
async fn test_show_restaurant_with_dishes() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Trattoria")).await.unwrap();
    app.seed(factory::dish(restaurant.id, "Lasagna", dec!(12.5)))
        .await
        .unwrap();

    let mut res = app
        .get(&format!("/api/restaurant/{}", restaurant.id))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let body: RestaurantDetail = res.json().await.unwrap();
    assert_eq!(body.restaurant.name, "Trattoria");
    assert_eq!(body.dishes.len(), 1);
    assert_eq!(body.dishes[0].price, dec!(12.5));
}

#[actix_web::test]
async fn test_show_missing_restaurant_returns_not_found() {
    let app = TestApp::spawn().await.unwrap();

    let res = app.get("/api/restaurant/100").send().await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// POST /api/restaurant
// =============================================================================

#[actix_web::test]
async fn test_store_restaurant_returns_created() {
    let app = TestApp::spawn().await.unwrap();

    let mut res = app
        .post("/api/restaurant")
        .send_json(&json!({
            "name": "  Noodle Bar ",
            "category": "Asian",
            "hasDelivery": true,
            "contactEmail": "hello@noodle.test",
        }))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);

    let location = res.headers().get(LOCATION).unwrap().to_str().unwrap().to_string();
    let body: Restaurant = res.json().await.unwrap();

    assert_eq!(location, format!("/api/restaurant/{}", body.id));
    assert_eq!(body.name, "Noodle Bar");
    assert!(body.has_delivery);
    assert_eq!(body.created_by_id, Some(1), "Caller becomes the owner");
}

#[actix_web::test]
async fn test_store_restaurant_rejects_invalid_payloads() {
    let app = TestApp::spawn().await.unwrap();

    let payloads = [
        json!({}),
        json!({ "name": "" }),
        json!({ "name": "a".repeat(101) }),
        json!({ "name": "Test", "contactEmail": "nope" }),
    ];

    for payload in payloads {
        let res = app.post("/api/restaurant").send_json(&payload).await.unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
    }
}

// =============================================================================
// PUT /api/restaurant/{id}
// =============================================================================

#[actix_web::test]
async fn test_update_restaurant() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Before")).await.unwrap();

    let mut res = app
        .put(&format!("/api/restaurant/{}", restaurant.id))
        .send_json(&json!({ "name": "After", "hasDelivery": true }))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let body: Restaurant = res.json().await.unwrap();
    assert_eq!(body.name, "After");
    assert!(body.has_delivery);
    assert_eq!(body.description, restaurant.description, "Untouched fields stay");
}

#[actix_web::test]
async fn test_update_missing_restaurant_returns_not_found() {
    let app = TestApp::spawn().await.unwrap();

    let res = app
        .put("/api/restaurant/100")
        .send_json(&json!({ "name": "After" }))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// DELETE /api/restaurant/{id}
// =============================================================================

#[actix_web::test]
async fn test_delete_restaurant_removes_dishes() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Closing")).await.unwrap();
    app.seed(factory::dish(restaurant.id, "Last", dec!(1)))
        .await
        .unwrap();

    let res = app
        .delete(&format!("/api/restaurant/{}", restaurant.id))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let remaining = dishes::Entity::find()
        .filter(dishes::Column::RestaurantId.eq(restaurant.id))
        .count(app.db())
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    let res = app
        .get(&format!("/api/restaurant/{}", restaurant.id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_missing_restaurant_returns_not_found() {
    let app = TestApp::spawn().await.unwrap();

    let res = app.delete("/api/restaurant/100").send().await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
