use sea_orm::{DatabaseConnection, NotSet, Set};

use crate::entities::v1::dishes::{ActiveModel, Model};
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{Identity, Operation, PolicyEvaluator};
use crate::requests::v1::dish::CreateDishRequest;
use crate::responses::v1::dish::Dish;
use crate::services::v1::restaurant::find_or_fail;

/// Store a dish under `restaurant_id`
///
/// The payload is validated before the restaurant is looked up, so a bad
/// payload for a missing restaurant is a 400.
#[::tracing::instrument(skip(db, metrics, policy, identity, request), fields(user_id = identity.user_id))]
pub async fn store(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    policy: &dyn PolicyEvaluator,
    identity: &Identity,
    restaurant_id: i32,
    request: CreateDishRequest,
) -> Result<Dish, Error> {
    request.validate()?;

    if let Some(body_id) = request.restaurant_id {
        if body_id != restaurant_id {
            ::tracing::debug!(body_id, "Ignoring restaurantId from body");
        }
    }

    let restaurant = find_or_fail(db, metrics, restaurant_id).await?;
    policy.authorize(identity, &restaurant, Operation::Create)?;

    let model = ActiveModel {
        id: NotSet,
        name: Set(request.name.unwrap_or_default().trim().to_string()),
        description: Set(request.description),
        price: Set(request.price),
        restaurant_id: Set(restaurant.id),
    };

    let dish = Model::store(db, metrics, model).await?;

    if let Some(m) = metrics {
        m.record_dish_created();
    }

    ::tracing::info!(dish_id = dish.id, "Dish created");

    Ok(dish.into())
}
