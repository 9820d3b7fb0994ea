use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{controllers, errors, requests, responses};

/// Bearer token scheme referenced as `token` by the protected paths
pub struct Authentication;

impl Modify for Authentication {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("UUID")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Restaurant API"),
    tags(
        (name = "Restaurant"),
        (name = "Dish"),
        (name = "Health"),
    ),
    modifiers(&Authentication),
    paths(
        controllers::v1::restaurant::paginate,
        controllers::v1::restaurant::store,
        controllers::v1::restaurant::show,
        controllers::v1::restaurant::update,
        controllers::v1::restaurant::delete,

        controllers::v1::dish::store,
        controllers::v1::dish::index,
        controllers::v1::dish::show,
        controllers::v1::dish::delete_all,

        controllers::health::health,
        controllers::health::health_db,
        controllers::health::ready,
        controllers::health::live,
    ),
    components(schemas(
        errors::ErrorResponse,
        errors::Validation,

        requests::v1::dish::CreateDishRequest,
        requests::v1::restaurant::CreateRestaurantRequest,
        requests::v1::restaurant::UpdateRestaurantRequest,
        requests::v1::restaurant::RestaurantPaginationOrder,
        requests::v1::restaurant::SortDirection,

        responses::v1::dish::Dish,
        responses::v1::restaurant::Restaurant,
        responses::v1::restaurant::RestaurantDetail,
        responses::v1::restaurant::RestaurantPaginationResponse,

        controllers::health::LivenessResponse,
        controllers::health::ReadinessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
