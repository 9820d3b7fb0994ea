use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::{Error, Validation};

pub const NAME_MAX_LENGTH: usize = 100;
pub const PAGE_LIMIT_MAX: u64 = 100;

fn validate_name(validation: &mut Validation, name: Option<&str>, required: bool) {
    match name.map(str::trim) {
        None if !required => (),
        None | Some("") => validation.add("name", "Name is required"),
        Some(name) if name.chars().count() > NAME_MAX_LENGTH => validation.add(
            "name",
            format!("Name must be at most {} characters", NAME_MAX_LENGTH),
        ),
        Some(_) => (),
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    #[serde(default)]
    #[schema(example = "Pizzeria")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(example = "Italian")]
    pub category: Option<String>,
    #[serde(default)]
    pub has_delivery: bool,
    #[serde(default)]
    #[schema(example = "contact@pizzeria.test")]
    pub contact_email: Option<String>,
}

impl CreateRestaurantRequest {
    pub fn validate(&self) -> Result<(), Error> {
        let mut validation = Validation::new();

        validate_name(&mut validation, self.name.as_deref(), true);

        if let Some(email) = &self.contact_email {
            let email = email.trim();
            if !email.is_empty() && !email.contains('@') {
                validation.add("contactEmail", "Contact email is not a valid email address");
            }
        }

        validation.into_result()
    }
}

/// Fields left out of the body keep their stored value
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub has_delivery: Option<bool>,
}

impl UpdateRestaurantRequest {
    pub fn validate(&self) -> Result<(), Error> {
        let mut validation = Validation::new();

        validate_name(&mut validation, self.name.as_deref(), false);

        validation.into_result()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RestaurantPaginationOrder {
    #[default]
    Name,
    Category,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Query string of `GET /api/restaurant`
#[derive(Clone, Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RestaurantPaginationRequest {
    /// Matched against name and description
    pub search: Option<String>,
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Page size, 1-100, defaults to 10
    pub limit: Option<u64>,
    #[param(inline)]
    pub order: Option<RestaurantPaginationOrder>,
    #[param(inline)]
    pub sort: Option<SortDirection>,
}

impl RestaurantPaginationRequest {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(10)
    }

    /// Rows to skip, `None` when the page lies beyond what a query can address
    fn checked_offset(&self) -> Option<u64> {
        self.page()
            .saturating_sub(1)
            .checked_mul(self.limit())
            .filter(|offset| *offset <= i64::MAX as u64)
    }

    pub fn offset(&self) -> u64 {
        self.checked_offset().unwrap_or(i64::MAX as u64)
    }

    pub fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty())
    }

    pub fn order(&self) -> RestaurantPaginationOrder {
        self.order.unwrap_or_default()
    }

    pub fn sort(&self) -> SortDirection {
        self.sort.unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), Error> {
        let mut validation = Validation::new();

        if self.page() == 0 {
            validation.add("page", "Page must be at least 1");
        } else if self.checked_offset().is_none() {
            validation.add("page", "Page is out of range");
        }
        if !(1..=PAGE_LIMIT_MAX).contains(&self.limit()) {
            validation.add(
                "limit",
                format!("Limit must be between 1 and {}", PAGE_LIMIT_MAX),
            );
        }

        validation.into_result()
    }
}
