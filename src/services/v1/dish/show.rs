use sea_orm::DatabaseConnection;

use crate::entities::v1::dishes::Model;
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::responses::v1::dish::Dish;
use crate::services::v1::restaurant::find_or_fail;

/// Fails with 404 when the dish belongs to another restaurant
#[::tracing::instrument(skip(db, metrics))]
pub async fn show(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    restaurant_id: i32,
    id: i32,
) -> Result<Dish, Error> {
    let restaurant = find_or_fail(db, metrics, restaurant_id).await?;

    let dish = Model::find_for_restaurant(db, metrics, restaurant.id, id)
        .await?
        .ok_or_else(|| Error::not_found("Dish not found"))?;

    Ok(dish.into())
}
