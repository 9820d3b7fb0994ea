use sea_orm::prelude::*;
use sea_orm::QueryOrder;

use crate::entities::v1::dishes::{ActiveModel, Column, Entity, Model};
use crate::metrics::AppMetrics;
use crate::models::timed;
use crate::responses::v1::dish::Dish;

impl Model {
    /// Dish `id`, only if it belongs to `restaurant_id`
    pub async fn find_for_restaurant(
        db: &DatabaseConnection,
        metrics: Option<&AppMetrics>,
        restaurant_id: i32,
        id: i32,
    ) -> Result<Option<Self>, DbErr> {
        let query = Entity::find_by_id(id)
            .filter(Column::RestaurantId.eq(restaurant_id))
            .one(db);

        timed(metrics, "dish_find_for_restaurant", query).await
    }

    pub async fn all_for_restaurant(
        db: &DatabaseConnection,
        metrics: Option<&AppMetrics>,
        restaurant_id: i32,
    ) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .filter(Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(Column::Id)
            .all(db);

        timed(metrics, "dish_all_for_restaurant", query).await
    }

    pub async fn store(
        db: &DatabaseConnection,
        metrics: Option<&AppMetrics>,
        model: ActiveModel,
    ) -> Result<Self, DbErr> {
        timed(metrics, "dish_store", model.insert(db)).await
    }

    /// Deletes every dish of the restaurant, returns how many were removed
    pub async fn delete_for_restaurant(
        db: &DatabaseConnection,
        metrics: Option<&AppMetrics>,
        restaurant_id: i32,
    ) -> Result<u64, DbErr> {
        let query = Entity::delete_many()
            .filter(Column::RestaurantId.eq(restaurant_id))
            .exec(db);

        timed(metrics, "dish_delete_for_restaurant", query)
            .await
            .map(|result| result.rows_affected)
    }
}

impl From<Model> for Dish {
    fn from(val: Model) -> Self {
        Dish {
            id: val.id,
            name: val.name,
            description: val.description,
            price: val.price,
            restaurant_id: val.restaurant_id,
        }
    }
}

impl From<&Model> for Dish {
    fn from(val: &Model) -> Self {
        Dish::from(val.clone())
    }
}
