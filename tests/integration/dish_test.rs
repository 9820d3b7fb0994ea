//! Dish endpoints under `/api/restaurant/{restaurantId}/dish`

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use restaurant_api::responses::v1::dish::Dish;
use restaurant_api::testing::{TestApp, factory};
use rust_decimal_macros::dec;
use serde_json::{Value, json};

fn dishes_path(restaurant_id: i32) -> String {
    format!("/api/restaurant/{}/dish", restaurant_id)
}

fn dish_path(restaurant_id: i32, id: i32) -> String {
    format!("/api/restaurant/{}/dish/{}", restaurant_id, id)
}

// =============================================================================
// POST /api/restaurant/{restaurantId}/dish
// =============================================================================

#[actix_web::test]
async fn test_create_dish_returns_created_with_location() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Test")).await.unwrap();

    let mut res = app
        .post(&dishes_path(restaurant.id))
        .send_json(&json!({
            "name": "Test",
            "description": "Test",
            "price": 9.9,
            "restaurantId": restaurant.id,
        }))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);

    let location = res
        .headers()
        .get(LOCATION)
        .expect("Location header should be present")
        .to_str()
        .unwrap()
        .to_string();
    let dish: Dish = res.json().await.unwrap();

    assert_eq!(location, dish_path(restaurant.id, dish.id));
    assert_eq!(dish.name, "Test");
    assert_eq!(dish.price, dec!(9.9));
    assert_eq!(dish.restaurant_id, restaurant.id);

    let res = app.get(&location).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK, "Location should point at the new dish");
}

#[actix_web::test]
async fn test_create_dish_without_name_returns_bad_request() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Test")).await.unwrap();

    let mut res = app
        .post(&dishes_path(restaurant.id))
        .send_json(&json!({
            "description": "Test",
            "price": 9.9,
            "restaurantId": restaurant.id,
        }))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert!(body["errors"]["name"].is_array(), "name should be reported: {}", body);
}

#[actix_web::test]
async fn test_create_dish_rejects_invalid_payloads() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Test")).await.unwrap();

    let payloads = [
        json!({ "name": "", "price": 1.0 }),
        json!({ "name": "   ", "price": 1.0 }),
        json!({ "name": "a".repeat(101), "price": 1.0 }),
        json!({ "name": "Test", "price": -1.0 }),
        json!({ "name": "Test", "price": 1e9 }),
        json!({ "name": "Test", "price": 9.999 }),
        json!({ "name": "Test", "description": "a".repeat(501) }),
        json!({ "name": "Test", "price": "cheap" }),
    ];

    for payload in payloads {
        let res = app
            .post(&dishes_path(restaurant.id))
            .send_json(&payload)
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
    }
}

#[actix_web::test]
async fn test_create_dish_with_malformed_json_returns_bad_request() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Test")).await.unwrap();

    let res = app
        .post(&dishes_path(restaurant.id))
        .insert_header(("content-type", "application/json"))
        .send_body("{\"name\": ")
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_create_dish_for_missing_restaurant_returns_not_found() {
    let app = TestApp::spawn().await.unwrap();

    let res = app
        .post(&dishes_path(100))
        .send_json(&json!({ "name": "Test", "price": 9.9, "restaurantId": 100 }))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_dish_uses_restaurant_from_path() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Path")).await.unwrap();
    let other = app.seed(factory::restaurant("Body")).await.unwrap();

    let mut res = app
        .post(&dishes_path(restaurant.id))
        .send_json(&json!({ "name": "Test", "price": 1.5, "restaurantId": other.id }))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);

    let dish: Dish = res.json().await.unwrap();
    assert_eq!(dish.restaurant_id, restaurant.id);
}

// =============================================================================
// DELETE /api/restaurant/{restaurantId}/dish
// =============================================================================

#[actix_web::test]
async fn test_delete_all_dishes_returns_no_content() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Test")).await.unwrap();
    app.seed(factory::dish(restaurant.id, "Test", dec!(9.9)))
        .await
        .unwrap();

    let res = app.delete(&dishes_path(restaurant.id)).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_delete_all_dishes_leaves_nothing_behind() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Test")).await.unwrap();
    let dish = app
        .seed(factory::dish(restaurant.id, "First", dec!(1)))
        .await
        .unwrap();
    app.seed(factory::dish(restaurant.id, "Second", dec!(2)))
        .await
        .unwrap();

    let res = app.delete(&dishes_path(restaurant.id)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let mut res = app.get(&dishes_path(restaurant.id)).send().await.unwrap();
    let dishes: Vec<Dish> = res.json().await.unwrap();
    assert!(dishes.is_empty());

    let res = app.get(&dish_path(restaurant.id, dish.id)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.delete(&dishes_path(restaurant.id)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT, "Deleting again is not an error");
}

#[actix_web::test]
async fn test_delete_all_dishes_keeps_other_restaurants() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Emptied")).await.unwrap();
    let other = app.seed(factory::restaurant("Kept")).await.unwrap();
    app.seed(factory::dish(restaurant.id, "Gone", dec!(1)))
        .await
        .unwrap();
    let kept = app
        .seed(factory::dish(other.id, "Kept", dec!(2)))
        .await
        .unwrap();

    app.delete(&dishes_path(restaurant.id)).send().await.unwrap();

    let res = app.get(&dish_path(other.id, kept.id)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_delete_all_dishes_for_missing_restaurant_returns_not_found() {
    let app = TestApp::spawn().await.unwrap();

    let res = app.delete(&dishes_path(100)).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// GET /api/restaurant/{restaurantId}/dish
// =============================================================================

#[actix_web::test]
async fn test_get_all_dishes_returns_ok() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Test")).await.unwrap();

    let mut res = app.get(&dishes_path(restaurant.id)).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let dishes: Vec<Dish> = res.json().await.unwrap();
    assert!(dishes.is_empty());
}

#[actix_web::test]
async fn test_get_all_dishes_lists_only_that_restaurant() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Mine")).await.unwrap();
    let other = app.seed(factory::restaurant("Other")).await.unwrap();
    app.seed(factory::dish(restaurant.id, "First", dec!(1.25)))
        .await
        .unwrap();
    app.seed(factory::dish(restaurant.id, "Second", dec!(2.5)))
        .await
        .unwrap();
    app.seed(factory::dish(other.id, "Elsewhere", dec!(3)))
        .await
        .unwrap();

    let mut res = app.get(&dishes_path(restaurant.id)).send().await.unwrap();
    let dishes: Vec<Dish> = res.json().await.unwrap();

    let names: Vec<_> = dishes.iter().map(|dish| dish.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert!(dishes.iter().all(|dish| dish.restaurant_id == restaurant.id));
}

#[actix_web::test]
async fn test_get_all_dishes_for_missing_restaurant_returns_not_found() {
    let app = TestApp::spawn().await.unwrap();

    let res = app.get(&dishes_path(100)).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// GET /api/restaurant/{restaurantId}/dish/{id}
// =============================================================================

#[actix_web::test]
async fn test_get_dish_returns_ok() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app.seed(factory::restaurant("Test")).await.unwrap();
    let dish = app
        .seed(factory::dish(restaurant.id, "Test", dec!(9.9)))
        .await
        .unwrap();

    let mut res = app.get(&dish_path(restaurant.id, dish.id)).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let body: Dish = res.json().await.unwrap();
    assert_eq!(body.id, dish.id);
    assert_eq!(body.name, "Test");
    assert_eq!(body.price, dec!(9.9));
}

#[actix_web::test]
async fn test_get_dish_with_mismatched_ids_returns_not_found() {
    let app = TestApp::spawn().await.unwrap();
    let restaurant = app
        .seed(factory::restaurant_with_id(1, "Test"))
        .await
        .unwrap();
    let other = app.seed(factory::restaurant("Other")).await.unwrap();
    app.seed(factory::dish(restaurant.id, "Mine", dec!(1)))
        .await
        .unwrap();
    let foreign = app
        .seed(factory::dish(other.id, "Theirs", dec!(1)))
        .await
        .unwrap();

    let cases = [(1, 1000), (100, 2), (restaurant.id, foreign.id)];

    for (restaurant_id, dish_id) in cases {
        let res = app.get(&dish_path(restaurant_id, dish_id)).send().await.unwrap();

        assert_eq!(
            res.status(),
            StatusCode::NOT_FOUND,
            "restaurant {} dish {}",
            restaurant_id,
            dish_id
        );
    }
}

#[actix_web::test]
async fn test_get_dish_with_non_numeric_id_returns_not_found() {
    let app = TestApp::spawn().await.unwrap();

    let res = app.get("/api/restaurant/1/dish/abc").send().await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
