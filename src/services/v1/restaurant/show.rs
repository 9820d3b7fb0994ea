use sea_orm::DatabaseConnection;

use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::responses::v1::restaurant::RestaurantDetail;

#[::tracing::instrument(skip(db, metrics))]
pub async fn show(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    id: i32,
) -> Result<RestaurantDetail, Error> {
    let restaurant = super::find_or_fail(db, metrics, id).await?;
    let dishes = restaurant.dishes(db, metrics).await?;

    Ok(RestaurantDetail::new(restaurant, dishes))
}
