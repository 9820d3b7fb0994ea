pub mod middleware;

pub use middleware::MetricsMiddleware;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::{Arc, OnceLock};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

const HTTP_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0];
const DB_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0];

/// Process-wide Prometheus recorder
///
/// The recorder is installed by the first instance; later instances (every
/// test harness builds one) share it.
#[derive(Clone)]
pub struct AppMetrics {
    prometheus_handle: Arc<PrometheusHandle>,
}

impl AppMetrics {
    pub fn new() -> Self {
        Self::with_config(None)
    }

    pub fn with_config(config: Option<&crate::config::AppConfig>) -> Self {
        let handle = PROMETHEUS_HANDLE.get_or_init(|| {
            let builder = match config {
                Some(cfg) => PrometheusBuilder::new()
                    .add_global_label("service", cfg.app.name.clone())
                    .add_global_label("version", cfg.app.version.clone())
                    .add_global_label("environment", cfg.app.environment.clone()),
                None => PrometheusBuilder::new(),
            };

            let builder = builder
                .set_buckets_for_metric(
                    Matcher::Full("http_requests_duration_seconds".to_string()),
                    HTTP_BUCKETS,
                )
                .and_then(|builder| {
                    builder.set_buckets_for_metric(
                        Matcher::Full("database_queries_duration_seconds".to_string()),
                        DB_BUCKETS,
                    )
                })
                .unwrap_or_else(|e| {
                    ::tracing::warn!(error = %e, "Falling back to default histogram buckets");
                    PrometheusBuilder::new()
                });

            let recorder = builder.build_recorder();
            let handle = recorder.handle();

            if let Err(e) = metrics::set_global_recorder(recorder) {
                ::tracing::warn!(error = %e, "Prometheus recorder was not installed");
            }

            Self::describe_metrics();

            handle
        });

        Self {
            prometheus_handle: Arc::new(handle.clone()),
        }
    }

    fn describe_metrics() {
        describe_counter!("http_requests_total", "Total number of HTTP requests");
        describe_histogram!(
            "http_requests_duration_seconds",
            "HTTP request duration in seconds"
        );
        describe_gauge!(
            "http_requests_in_flight",
            "Number of HTTP requests currently being processed"
        );

        describe_counter!("database_queries_total", "Total number of database queries");
        describe_histogram!(
            "database_queries_duration_seconds",
            "Database query duration in seconds"
        );

        describe_counter!("restaurants_created_total", "Restaurants created through the API");
        describe_counter!("dishes_created_total", "Dishes created through the API");
        describe_counter!("dishes_deleted_total", "Dishes removed through the API");
    }

    pub fn record_http_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        counter!(
            "http_requests_total",
            "method" => method.to_string(),
            "path" => path.to_string(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            "http_requests_duration_seconds",
            "method" => method.to_string(),
            "path" => path.to_string()
        )
        .record(duration_secs);
    }

    pub fn http_request_start(&self) {
        gauge!("http_requests_in_flight").increment(1.0);
    }

    pub fn http_request_end(&self) {
        gauge!("http_requests_in_flight").decrement(1.0);
    }

    pub fn record_db_query(&self, operation: &str, duration_secs: f64) {
        counter!("database_queries_total", "operation" => operation.to_string()).increment(1);
        histogram!("database_queries_duration_seconds", "operation" => operation.to_string())
            .record(duration_secs);
    }

    pub fn record_restaurant_created(&self) {
        counter!("restaurants_created_total").increment(1);
    }

    pub fn record_dish_created(&self) {
        counter!("dishes_created_total").increment(1);
    }

    pub fn record_dishes_deleted(&self, count: u64) {
        counter!("dishes_deleted_total").increment(count);
    }

    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}
