pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod server;
pub mod services;
pub mod telemetry;

// Always compiled so integration tests can link against it
pub mod testing;

pub use errors::{Error, ErrorResponse, Validation};
pub use metrics::{AppMetrics, MetricsMiddleware};
pub use middlewares::v1::auth::{Auth, Identity, IdentityProvider, PolicyEvaluator};
pub use server::Context;
