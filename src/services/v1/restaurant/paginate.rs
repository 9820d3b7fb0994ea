use sea_orm::prelude::*;
use sea_orm::{Condition, Order, PaginatorTrait, QueryOrder, QuerySelect};

use crate::entities::v1::restaurants::{Column, Entity};
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::models::timed;
use crate::requests::v1::restaurant::{
    RestaurantPaginationOrder, RestaurantPaginationRequest, SortDirection,
};
use crate::responses::v1::restaurant::RestaurantPaginationResponse;

#[::tracing::instrument(skip(db, metrics))]
pub async fn paginate(
    db: &DatabaseConnection,
    metrics: Option<&AppMetrics>,
    request: RestaurantPaginationRequest,
) -> Result<RestaurantPaginationResponse, Error> {
    request.validate()?;

    let mut query = Entity::find();

    if let Some(search) = request.search() {
        let search = format!("%{}%", search);

        query = query.filter(
            Condition::any()
                .add(Column::Name.like(search.clone()))
                .add(Column::Description.like(search)),
        );
    }

    let total = timed(metrics, "restaurant_count", query.clone().count(db)).await?;

    let query = query
        .order_by(
            match request.order() {
                RestaurantPaginationOrder::Name => Column::Name,
                RestaurantPaginationOrder::Category => Column::Category,
            },
            match request.sort() {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            },
        )
        .order_by_asc(Column::Id)
        .limit(request.limit())
        .offset(request.offset());

    let restaurants = timed(metrics, "restaurant_paginate", query.all(db)).await?;

    Ok(RestaurantPaginationResponse {
        total,
        page: request.page(),
        pages: total.div_ceil(request.limit()),
        data: restaurants.into_iter().map(Into::into).collect(),
    })
}
