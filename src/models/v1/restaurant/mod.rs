use sea_orm::prelude::*;
use sea_orm::{QueryOrder, Set, TransactionTrait};

use crate::entities::v1::dishes;
use crate::entities::v1::restaurants::{ActiveModel, Entity, Model};
use crate::metrics::AppMetrics;
use crate::models::timed;
use crate::requests::v1::restaurant::UpdateRestaurantRequest;
use crate::responses::v1::restaurant::{Restaurant, RestaurantDetail};

impl Model {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        metrics: Option<&AppMetrics>,
        id: i32,
    ) -> Result<Option<Self>, DbErr> {
        timed(metrics, "restaurant_find_by_id", Entity::find_by_id(id).one(db)).await
    }

    pub async fn store(
        db: &DatabaseConnection,
        metrics: Option<&AppMetrics>,
        model: ActiveModel,
    ) -> Result<Self, DbErr> {
        timed(metrics, "restaurant_store", model.insert(db)).await
    }

    pub async fn dishes(
        &self,
        db: &DatabaseConnection,
        metrics: Option<&AppMetrics>,
    ) -> Result<Vec<dishes::Model>, DbErr> {
        let query = self
            .find_related(dishes::Entity)
            .order_by_asc(dishes::Column::Id)
            .all(db);

        timed(metrics, "restaurant_dishes", query).await
    }

    pub async fn update(
        &self,
        db: &DatabaseConnection,
        metrics: Option<&AppMetrics>,
        request: &UpdateRestaurantRequest,
    ) -> Result<Self, DbErr> {
        let mut model = ActiveModel::from(self.clone());

        if let Some(name) = &request.name {
            model.name = Set(name.trim().to_string());
        }
        if request.description.is_some() {
            model.description = Set(request.description.clone());
        }
        if let Some(has_delivery) = request.has_delivery {
            model.has_delivery = Set(has_delivery);
        }

        timed(metrics, "restaurant_update", model.update(db)).await
    }

    /// Removes the restaurant and its dishes in one transaction
    pub async fn remove(
        &self,
        db: &DatabaseConnection,
        metrics: Option<&AppMetrics>,
    ) -> Result<(), DbErr> {
        let id = self.id;
        let query = async move {
            let txn = db.begin().await?;

            dishes::Entity::delete_many()
                .filter(dishes::Column::RestaurantId.eq(id))
                .exec(&txn)
                .await?;
            Entity::delete_by_id(id).exec(&txn).await?;

            txn.commit().await
        };

        timed(metrics, "restaurant_remove", query).await
    }
}

impl From<Model> for Restaurant {
    fn from(val: Model) -> Self {
        Restaurant {
            id: val.id,
            name: val.name,
            description: val.description,
            category: val.category,
            has_delivery: val.has_delivery,
            contact_email: val.contact_email,
            created_by_id: val.created_by_id,
        }
    }
}

impl From<&Model> for Restaurant {
    fn from(val: &Model) -> Self {
        Restaurant::from(val.clone())
    }
}

impl RestaurantDetail {
    pub fn new(restaurant: Model, dishes: Vec<dishes::Model>) -> Self {
        Self {
            restaurant: restaurant.into(),
            dishes: dishes.into_iter().map(Into::into).collect(),
        }
    }
}
