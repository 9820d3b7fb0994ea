//! Ready-to-seed active models

use rust_decimal::Decimal;
use sea_orm::{NotSet, Set};
use uuid::Uuid;

use crate::entities::v1::users::Role;
use crate::entities::v1::{dishes, restaurants, tokens, users};

/// Restaurant without an owner, only admins may modify it
pub fn restaurant(name: &str) -> restaurants::ActiveModel {
    restaurants::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(Some(format!("{} description", name))),
        category: Set(Some("Test".to_string())),
        has_delivery: Set(false),
        contact_email: Set(None),
        created_by_id: Set(None),
    }
}

/// Restaurant with a fixed primary key
pub fn restaurant_with_id(id: i32, name: &str) -> restaurants::ActiveModel {
    restaurants::ActiveModel {
        id: Set(id),
        ..restaurant(name)
    }
}

pub fn restaurant_owned_by(name: &str, user_id: i32) -> restaurants::ActiveModel {
    restaurants::ActiveModel {
        created_by_id: Set(Some(user_id)),
        ..restaurant(name)
    }
}

pub fn dish(restaurant_id: i32, name: &str, price: Decimal) -> dishes::ActiveModel {
    dishes::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(Some(format!("{} description", name))),
        price: Set(price),
        restaurant_id: Set(restaurant_id),
    }
}

pub fn user(email: &str, role: Role) -> users::ActiveModel {
    let name = email.split('@').next().unwrap_or(email);

    users::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        role: Set(role),
    }
}

/// Token that never expires
pub fn token(user_id: i32) -> tokens::ActiveModel {
    tokens::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        expired_at: Set(None),
    }
}
