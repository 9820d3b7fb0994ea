use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::v1::{tokens, users};
use crate::entities::v1::users::Role;
use crate::errors::Error;

/// The user a request is executed as
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: i32,
    #[schema(example = "John Doe")]
    pub name: String,
    pub role: Role,
}

impl Identity {
    pub fn new<T: ToString>(user_id: i32, name: T, role: Role) -> Self {
        Self {
            user_id,
            name: name.to_string(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<users::Model> for Identity {
    fn from(user: users::Model) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            role: user.role,
        }
    }
}

/// Resolves the identity of the caller from the `Authorization` header value
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn identify(
        &self,
        db: &DatabaseConnection,
        authorization: Option<&str>,
    ) -> Result<Identity, Error>;
}

/// Looks up `Bearer <uuid>` tokens in the tokens table
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenIdentityProvider;

impl TokenIdentityProvider {
    fn parse(authorization: Option<&str>) -> Result<Uuid, Error> {
        let header = authorization.ok_or_else(|| {
            ::tracing::warn!("Missing authorization header");
            Error::unauthorized("Missing authorization header")
        })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            ::tracing::warn!("Authorization header is not a bearer token");
            Error::unauthorized("Invalid authorization header")
        })?;

        Uuid::parse_str(token.trim()).map_err(|e| {
            ::tracing::warn!(error = %e, "Failed to parse bearer token");
            Error::unauthorized("Invalid token")
        })
    }
}

#[async_trait]
impl IdentityProvider for TokenIdentityProvider {
    async fn identify(
        &self,
        db: &DatabaseConnection,
        authorization: Option<&str>,
    ) -> Result<Identity, Error> {
        let id = Self::parse(authorization)?;

        let (token, user) = match tokens::Model::find_with_user(db, id).await? {
            Some(found) => found,
            None => {
                ::tracing::warn!(token_id = %id, "Token not found");

                return Err(Error::unauthorized("Token not found"));
            }
        };

        if token.is_expired(chrono::Utc::now().naive_utc()) {
            ::tracing::warn!(token_id = %id, "Token expired");

            return Err(Error::unauthorized("Token expired"));
        }

        ::tracing::debug!(user_id = user.id, "Request authenticated");

        Ok(user.into())
    }
}

/// Executes every request as the same user, credentials are never checked
#[derive(Clone, Debug)]
pub struct FixedIdentityProvider {
    identity: Identity,
}

impl FixedIdentityProvider {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

#[async_trait]
impl IdentityProvider for FixedIdentityProvider {
    async fn identify(
        &self,
        _: &DatabaseConnection,
        _: Option<&str>,
    ) -> Result<Identity, Error> {
        Ok(self.identity.clone())
    }
}
