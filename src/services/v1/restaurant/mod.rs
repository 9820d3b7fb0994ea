use sea_orm::DatabaseConnection;

use crate::entities::v1::restaurants::Model;
use crate::errors::Error;
use crate::metrics::AppMetrics;

pub mod delete;
pub mod paginate;
pub mod show;
pub mod store;
pub mod update;

/// Load a restaurant, 404 when it does not exist
pub(crate) async fn find_or_fail(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    id: i32,
) -> Result<Model, Error> {
    Model::find_by_id(db, metrics, id).await?.ok_or_else(|| {
        ::tracing::info!(restaurant_id = id, "Restaurant not found");
        Error::not_found("Restaurant not found")
    })
}
