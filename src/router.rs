use actix_web::web::{self, JsonConfig, QueryConfig, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::config::ApiConfig;
use crate::controllers;
use crate::errors::Error;

/// Register every route together with the body and query error handlers
pub fn route(app: &mut ServiceConfig, api: &ApiConfig) {
    app.app_data(JsonConfig::default().error_handler(|e, _| {
        ::tracing::debug!(error = %e, "Rejected request body");
        Error::bad_request(e).into()
    }));
    app.app_data(QueryConfig::default().error_handler(|e, _| {
        ::tracing::debug!(error = %e, "Rejected query string");
        Error::bad_request(e).into()
    }));

    // Restaurant
    app.service(controllers::v1::restaurant::paginate);
    app.service(controllers::v1::restaurant::store);
    app.service(controllers::v1::restaurant::show);
    app.service(controllers::v1::restaurant::update);
    app.service(controllers::v1::restaurant::delete);
    // Dish
    app.service(controllers::v1::dish::store);
    app.service(controllers::v1::dish::index);
    app.service(controllers::v1::dish::show);
    app.service(controllers::v1::dish::delete_all);

    // Health
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);
    app.service(controllers::health::ready);
    app.service(controllers::health::live);

    app.service(controllers::metrics::metrics);

    // must be at the end, the swagger route is a catch-all under its prefix
    if api.swagger_enabled {
        let path = api.swagger_path.trim_end_matches('/').to_string();

        app.service(web::redirect(path.clone(), format!("{}/", path)));
        app.service(SwaggerUi::new(format!("{}/{{_:.*}}", path)).urls(vec![(
            Url::new("Restaurant API", "/api.json"),
            Definition::openapi(),
        )]));
    }
}
