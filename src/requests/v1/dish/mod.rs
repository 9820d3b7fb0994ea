use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{Error, Validation};

pub const NAME_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MAX_LENGTH: usize = 500;
/// Prices are stored as DECIMAL(10,2)
pub const PRICE_SCALE: u32 = 2;
pub const PRICE_INTEGER_DIGITS: u32 = 8;

/// Payload for creating a dish
///
/// The restaurant is taken from the route; `restaurantId` in the body is
/// accepted for compatibility and ignored.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishRequest {
    #[serde(default)]
    #[schema(example = "Margherita")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Tomato, mozzarella, basil")]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 9.9)]
    pub price: Decimal,
    #[serde(default)]
    pub restaurant_id: Option<i32>,
}

impl CreateDishRequest {
    /// Validates:
    /// - name: required, 1-100 characters after trimming
    /// - description: at most 500 characters
    /// - price: not negative, at most 8 integer digits and 2 decimal places
    pub fn validate(&self) -> Result<(), Error> {
        let mut validation = Validation::new();

        match self.name.as_deref().map(str::trim) {
            None | Some("") => validation.add("name", "Name is required"),
            Some(name) if name.chars().count() > NAME_MAX_LENGTH => validation.add(
                "name",
                format!("Name must be at most {} characters", NAME_MAX_LENGTH),
            ),
            Some(_) => (),
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_LENGTH {
                validation.add(
                    "description",
                    format!(
                        "Description must be at most {} characters",
                        DESCRIPTION_MAX_LENGTH
                    ),
                );
            }
        }

        if self.price.is_sign_negative() && !self.price.is_zero() {
            validation.add("price", "Price must not be negative");
        }
        if self.price.normalize().scale() > PRICE_SCALE {
            validation.add(
                "price",
                format!("Price must have at most {} decimal places", PRICE_SCALE),
            );
        }
        let price_limit = 10_u64.pow(PRICE_INTEGER_DIGITS);
        if self.price.abs() >= Decimal::from(price_limit) {
            validation.add("price", format!("Price must be below {}", price_limit));
        }

        validation.into_result()
    }
}
