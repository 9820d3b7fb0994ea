use sea_orm::{DatabaseConnection, NotSet, Set};

use crate::entities::v1::restaurants::{ActiveModel, Model};
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::Identity;
use crate::requests::v1::restaurant::CreateRestaurantRequest;
use crate::responses::v1::restaurant::Restaurant;

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Store a restaurant owned by the caller
#[::tracing::instrument(skip(db, metrics, identity, request), fields(user_id = identity.user_id))]
pub async fn store(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    identity: &Identity,
    request: CreateRestaurantRequest,
) -> Result<Restaurant, Error> {
    request.validate()?;

    let model = ActiveModel {
        id: NotSet,
        name: Set(request.name.unwrap_or_default().trim().to_string()),
        description: Set(non_empty(request.description)),
        category: Set(non_empty(request.category)),
        has_delivery: Set(request.has_delivery),
        contact_email: Set(non_empty(request.contact_email)),
        created_by_id: Set(Some(identity.user_id)),
    };

    let restaurant = Model::store(db, metrics, model).await?;

    if let Some(m) = metrics {
        m.record_restaurant_created();
    }

    ::tracing::info!(restaurant_id = restaurant.id, "Restaurant created");

    Ok(restaurant.into())
}
