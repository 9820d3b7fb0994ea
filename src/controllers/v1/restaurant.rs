use actix_web::http::header::LOCATION;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{HttpResponse, Responder, delete, get, post, put};
use sea_orm::DatabaseConnection;

use crate::errors::{Error, ErrorResponse};
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{Auth, PolicyEvaluator};
use crate::requests::v1::restaurant::{
    CreateRestaurantRequest, RestaurantPaginationRequest, UpdateRestaurantRequest,
};
use crate::responses::v1::restaurant::{Restaurant, RestaurantDetail, RestaurantPaginationResponse};
use crate::services;

/// Paginate restaurants
#[utoipa::path(
    tag = "Restaurant",
    params(RestaurantPaginationRequest),
    responses(
        RestaurantPaginationResponse,
        (status = 400, description = "Bad Request", body = ErrorResponse),
    )
)]
#[get("/api/restaurant")]
pub async fn paginate(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    Query(request): Query<RestaurantPaginationRequest>,
) -> Result<impl Responder, Error> {
    let response =
        services::v1::restaurant::paginate::paginate(&db, Some(metrics.get_ref()), request).await?;
    Ok(Json(response))
}

/// Store new restaurant
///
/// The caller becomes the owner of the restaurant
#[utoipa::path(
    tag = "Restaurant",
    security(("token" = [])),
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Created", body = Restaurant, headers(("Location" = String))),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    )
)]
#[post("/api/restaurant")]
pub async fn store(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    auth: Auth,
    Json(request): Json<CreateRestaurantRequest>,
) -> Result<impl Responder, Error> {
    let restaurant = services::v1::restaurant::store::store(
        &db,
        Some(metrics.get_ref()),
        auth.identity(),
        request,
    )
    .await?;

    Ok(HttpResponse::Created()
        .insert_header((LOCATION, format!("/api/restaurant/{}", restaurant.id)))
        .json(restaurant))
}

/// Show restaurant with its dishes
#[utoipa::path(
    tag = "Restaurant",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "OK", body = RestaurantDetail),
        (status = 404, description = "Not Found", body = ErrorResponse),
    )
)]
#[get("/api/restaurant/{id}")]
pub async fn show(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    id: Path<i32>,
) -> Result<impl Responder, Error> {
    let response =
        services::v1::restaurant::show::show(&db, Some(metrics.get_ref()), id.into_inner()).await?;
    Ok(Json(response))
}

/// Update restaurant by id
///
/// Only the owner or an admin may update
#[utoipa::path(
    tag = "Restaurant",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Restaurant id")),
    request_body = UpdateRestaurantRequest,
    responses(
        Restaurant,
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Not Found", body = ErrorResponse),
    )
)]
#[put("/api/restaurant/{id}")]
pub async fn update(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    policy: Data<dyn PolicyEvaluator>,
    auth: Auth,
    id: Path<i32>,
    Json(request): Json<UpdateRestaurantRequest>,
) -> Result<impl Responder, Error> {
    let response = services::v1::restaurant::update::update(
        &db,
        Some(metrics.get_ref()),
        policy.get_ref(),
        auth.identity(),
        id.into_inner(),
        request,
    )
    .await?;
    Ok(Json(response))
}

/// Delete restaurant by id, dishes included
#[utoipa::path(
    tag = "Restaurant",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "No Content"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Not Found", body = ErrorResponse),
    )
)]
#[delete("/api/restaurant/{id}")]
pub async fn delete(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    policy: Data<dyn PolicyEvaluator>,
    auth: Auth,
    id: Path<i32>,
) -> Result<impl Responder, Error> {
    services::v1::restaurant::delete::delete(
        &db,
        Some(metrics.get_ref()),
        policy.get_ref(),
        auth.identity(),
        id.into_inner(),
    )
    .await?;

    Ok(HttpResponse::NoContent().finish())
}
