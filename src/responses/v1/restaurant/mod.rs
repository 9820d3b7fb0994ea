use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

use crate::responses::v1::dish::Dish;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "OK")]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i32,
    #[schema(example = "Pizzeria")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "Italian")]
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub created_by_id: Option<i32>,
}

/// Restaurant together with its dishes
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub dishes: Vec<Dish>,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses)]
#[response(status = 200, description = "OK")]
pub struct RestaurantPaginationResponse {
    pub total: u64,
    pub page: u64,
    pub pages: u64,
    pub data: Vec<Restaurant>,
}
