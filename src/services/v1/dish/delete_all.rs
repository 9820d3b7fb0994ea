use sea_orm::DatabaseConnection;

use crate::entities::v1::dishes::Model;
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{Identity, Operation, PolicyEvaluator};
use crate::services::v1::restaurant::find_or_fail;

#[::tracing::instrument(skip(db, metrics, policy, identity), fields(user_id = identity.user_id))]
pub async fn delete_all(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    policy: &dyn PolicyEvaluator,
    identity: &Identity,
    restaurant_id: i32,
) -> Result<u64, Error> {
    let restaurant = find_or_fail(db, metrics, restaurant_id).await?;
    policy.authorize(identity, &restaurant, Operation::Delete)?;

    let deleted = Model::delete_for_restaurant(db, metrics, restaurant.id).await?;

    if let Some(m) = metrics {
        m.record_dishes_deleted(deleted);
    }

    ::tracing::info!(deleted, "Dishes deleted");

    Ok(deleted)
}
