pub mod v1;

use std::future::Future;
use std::time::Instant;

use sea_orm::DbErr;

use crate::metrics::AppMetrics;

/// Run a query, recording its duration under `operation` and logging failures
pub(crate) async fn timed<T, F>(
    metrics: Option<&AppMetrics>,
    operation: &'static str,
    query: F,
) -> Result<T, DbErr>
where
    F: Future<Output = Result<T, DbErr>>,
{
    let start = Instant::now();
    let result = query.await;

    if let Err(e) = &result {
        ::tracing::error!(operation, error = %e, "Database query failed");
    }

    if let Some(m) = metrics {
        m.record_db_query(operation, start.elapsed().as_secs_f64());
    }

    result
}
