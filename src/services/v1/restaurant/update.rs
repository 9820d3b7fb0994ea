use sea_orm::DatabaseConnection;

use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{Identity, Operation, PolicyEvaluator};
use crate::requests::v1::restaurant::UpdateRestaurantRequest;
use crate::responses::v1::restaurant::Restaurant;

#[::tracing::instrument(skip(db, metrics, policy, identity, request), fields(user_id = identity.user_id))]
pub async fn update(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    policy: &dyn PolicyEvaluator,
    identity: &Identity,
    id: i32,
    request: UpdateRestaurantRequest,
) -> Result<Restaurant, Error> {
    request.validate()?;

    let restaurant = super::find_or_fail(db, metrics, id).await?;
    policy.authorize(identity, &restaurant, Operation::Update)?;

    let restaurant = restaurant.update(db, metrics, &request).await?;

    ::tracing::info!("Restaurant updated");

    Ok(restaurant.into())
}
