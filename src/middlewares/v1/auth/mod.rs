#[allow(clippy::module_inception)]
pub mod auth;
pub mod identity;
pub mod policy;

pub use auth::Auth;
pub use identity::{FixedIdentityProvider, Identity, IdentityProvider, TokenIdentityProvider};
pub use policy::{AllowAllPolicy, Operation, OwnershipPolicy, PolicyEvaluator};
