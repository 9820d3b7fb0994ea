use sea_orm::DatabaseConnection;

use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{Identity, Operation, PolicyEvaluator};

/// Delete a restaurant together with its dishes
#[::tracing::instrument(skip(db, metrics, policy, identity), fields(user_id = identity.user_id))]
pub async fn delete(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    policy: &dyn PolicyEvaluator,
    identity: &Identity,
    id: i32,
) -> Result<(), Error> {
    let restaurant = super::find_or_fail(db, metrics, id).await?;
    policy.authorize(identity, &restaurant, Operation::Delete)?;

    restaurant.remove(db, metrics).await?;

    ::tracing::info!("Restaurant deleted");

    Ok(())
}
