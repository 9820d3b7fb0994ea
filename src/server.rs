//! HTTP server wiring
//!
//! [`Context`] carries every collaborator a request handler can extract. The
//! binary builds it from configuration, the test harness swaps the identity
//! provider and policy before calling [`serve`].

use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{App, HttpServer};
use sea_orm::DatabaseConnection;

use crate::config::{ApiConfig, AppConfig, CorsConfig};
use crate::metrics::{AppMetrics, MetricsMiddleware};
use crate::middlewares::v1::auth::{
    IdentityProvider, OwnershipPolicy, PolicyEvaluator, TokenIdentityProvider,
};
use crate::router;

#[derive(Clone)]
pub struct Context {
    pub db: DatabaseConnection,
    pub identity: Arc<dyn IdentityProvider>,
    pub policy: Arc<dyn PolicyEvaluator>,
    pub metrics: AppMetrics,
    pub api: ApiConfig,
}

impl Context {
    /// Bearer token identities and ownership checks
    pub fn new(db: DatabaseConnection, metrics: AppMetrics) -> Self {
        Self {
            db,
            identity: Arc::new(TokenIdentityProvider),
            policy: Arc::new(OwnershipPolicy),
            metrics,
            api: ApiConfig::default(),
        }
    }

    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn PolicyEvaluator>) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    /// Register shared state and routes on one worker's app
    pub fn configure(&self, app: &mut ServiceConfig) {
        app.app_data(Data::new(self.db.clone()));
        app.app_data(Data::from(self.identity.clone()));
        app.app_data(Data::from(self.policy.clone()));
        app.app_data(Data::new(self.metrics.clone()));

        router::route(app, &self.api);
    }
}

pub fn cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .expose_headers(vec![actix_web::http::header::LOCATION])
        .max_age(config.max_age);

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| match origin.as_str() {
            "*" => cors.allow_any_origin(),
            origin => cors.allowed_origin(origin),
        })
}

/// Start serving on an already bound listener
///
/// The returned [`Server`] must be awaited or spawned to make progress. With
/// `handle_signals` off the server only stops through its handle.
pub fn serve(
    context: Context,
    listener: TcpListener,
    config: &AppConfig,
    handle_signals: bool,
) -> std::io::Result<Server> {
    let cors_config = config.cors.clone();

    let address = listener.local_addr()?;
    ::tracing::info!(%address, workers = config.server.workers, "Starting HTTP server");

    let mut server = HttpServer::new(move || {
        let context = context.clone();

        App::new()
            .wrap(MetricsMiddleware::new(context.metrics.clone()))
            .wrap(cors(&cors_config))
            .configure(move |app| context.configure(app))
    })
    .workers(config.server.workers)
    .shutdown_timeout(config.app.shutdown_timeout);

    if !handle_signals {
        server = server.disable_signals();
    }

    Ok(server.listen(listener)?.run())
}
