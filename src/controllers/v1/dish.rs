use actix_web::http::header::LOCATION;
use actix_web::web::{Data, Json, Path};
use actix_web::{HttpResponse, Responder, delete, get, post};
use sea_orm::DatabaseConnection;

use crate::errors::{Error, ErrorResponse};
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{Auth, PolicyEvaluator};
use crate::requests::v1::dish::CreateDishRequest;
use crate::responses::v1::dish::Dish;
use crate::services;

/// Store new dish for a restaurant
///
/// `restaurantId` in the body is ignored, the path decides the restaurant
#[utoipa::path(
    tag = "Dish",
    security(("token" = [])),
    params(("restaurant_id" = i32, Path, description = "Restaurant id")),
    request_body = CreateDishRequest,
    responses(
        (status = 201, description = "Created", body = Dish, headers(("Location" = String))),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Restaurant not found", body = ErrorResponse),
    )
)]
#[post("/api/restaurant/{restaurant_id}/dish")]
pub async fn store(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    policy: Data<dyn PolicyEvaluator>,
    auth: Auth,
    restaurant_id: Path<i32>,
    Json(request): Json<CreateDishRequest>,
) -> Result<impl Responder, Error> {
    let restaurant_id = restaurant_id.into_inner();
    let dish = services::v1::dish::store::store(
        &db,
        Some(metrics.get_ref()),
        policy.get_ref(),
        auth.identity(),
        restaurant_id,
        request,
    )
    .await?;

    Ok(HttpResponse::Created()
        .insert_header((
            LOCATION,
            format!("/api/restaurant/{}/dish/{}", restaurant_id, dish.id),
        ))
        .json(dish))
}

/// Delete every dish of a restaurant
#[utoipa::path(
    tag = "Dish",
    security(("token" = [])),
    params(("restaurant_id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "No Content"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Restaurant not found", body = ErrorResponse),
    )
)]
#[delete("/api/restaurant/{restaurant_id}/dish")]
pub async fn delete_all(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    policy: Data<dyn PolicyEvaluator>,
    auth: Auth,
    restaurant_id: Path<i32>,
) -> Result<impl Responder, Error> {
    services::v1::dish::delete_all::delete_all(
        &db,
        Some(metrics.get_ref()),
        policy.get_ref(),
        auth.identity(),
        restaurant_id.into_inner(),
    )
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// List dishes of a restaurant
#[utoipa::path(
    tag = "Dish",
    params(("restaurant_id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "OK", body = Vec<Dish>),
        (status = 404, description = "Restaurant not found", body = ErrorResponse),
    )
)]
#[get("/api/restaurant/{restaurant_id}/dish")]
pub async fn index(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    restaurant_id: Path<i32>,
) -> Result<impl Responder, Error> {
    let dishes =
        services::v1::dish::index::index(&db, Some(metrics.get_ref()), restaurant_id.into_inner())
            .await?;

    Ok(Json(dishes))
}

/// Show a dish of a restaurant
///
/// Fail if the restaurant does not exist or the dish is not one of its dishes
#[utoipa::path(
    tag = "Dish",
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant id"),
        ("id" = i32, Path, description = "Dish id"),
    ),
    responses(
        (status = 200, description = "OK", body = Dish),
        (status = 404, description = "Restaurant or dish not found", body = ErrorResponse),
    )
)]
#[get("/api/restaurant/{restaurant_id}/dish/{id}")]
pub async fn show(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    path: Path<(i32, i32)>,
) -> Result<impl Responder, Error> {
    let (restaurant_id, id) = path.into_inner();
    let dish = services::v1::dish::show::show(&db, Some(metrics.get_ref()), restaurant_id, id).await?;

    Ok(Json(dish))
}
