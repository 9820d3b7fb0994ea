use crate::entities::v1::restaurants;
use crate::errors::Error;

use super::Identity;

/// What the caller wants to do with a restaurant or its dishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

/// Decides whether an identity may perform an operation on a restaurant
pub trait PolicyEvaluator: Send + Sync {
    fn evaluate(
        &self,
        identity: &Identity,
        restaurant: &restaurants::Model,
        operation: Operation,
    ) -> bool;

    fn authorize(
        &self,
        identity: &Identity,
        restaurant: &restaurants::Model,
        operation: Operation,
    ) -> Result<(), Error> {
        if self.evaluate(identity, restaurant, operation) {
            return Ok(());
        }

        ::tracing::warn!(
            user_id = identity.user_id,
            restaurant_id = restaurant.id,
            operation = ?operation,
            "Authorization denied"
        );

        Err(Error::forbidden("You are not allowed to modify this restaurant"))
    }
}

/// Admins may do anything, everyone may read, only the creator may modify
#[derive(Clone, Copy, Debug, Default)]
pub struct OwnershipPolicy;

impl PolicyEvaluator for OwnershipPolicy {
    fn evaluate(
        &self,
        identity: &Identity,
        restaurant: &restaurants::Model,
        operation: Operation,
    ) -> bool {
        if identity.is_admin() || operation == Operation::Read {
            return true;
        }

        restaurant.created_by_id == Some(identity.user_id)
    }
}

/// Authorizes everything
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAllPolicy;

impl PolicyEvaluator for AllowAllPolicy {
    fn evaluate(&self, _: &Identity, _: &restaurants::Model, _: Operation) -> bool {
        true
    }
}
