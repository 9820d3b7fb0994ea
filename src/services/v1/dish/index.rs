use sea_orm::DatabaseConnection;

use crate::entities::v1::dishes::Model;
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::responses::v1::dish::Dish;
use crate::services::v1::restaurant::find_or_fail;

#[::tracing::instrument(skip(db, metrics))]
pub async fn index(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    restaurant_id: i32,
) -> Result<Vec<Dish>, Error> {
    let restaurant = find_or_fail(db, metrics, restaurant_id).await?;
    let dishes = Model::all_for_restaurant(db, metrics, restaurant.id).await?;

    Ok(dishes.into_iter().map(Into::into).collect())
}
