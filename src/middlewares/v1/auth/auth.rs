use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use sea_orm::DatabaseConnection;

use crate::errors::Error;

use super::{Identity, IdentityProvider};

/// Extractor for handlers that require an authenticated caller
///
/// Delegates to whichever [`IdentityProvider`] is registered as
/// `Data<dyn IdentityProvider>`.
#[derive(Clone, Debug)]
pub struct Auth(pub Identity);

impl Auth {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl Deref for Auth {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for Auth {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let provider = req.app_data::<Data<dyn IdentityProvider>>().cloned();
        let db = req.app_data::<Data<DatabaseConnection>>().cloned();
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let provider = provider.ok_or_else(|| {
                ::tracing::error!("Identity provider is not registered");
                Error::internal("Failed to resolve identity provider")
            })?;

            let db = db.ok_or_else(|| {
                ::tracing::error!("Database connection is not registered");
                Error::internal("Failed to get database connection")
            })?;

            let identity = provider.identify(&db, header.as_deref()).await?;

            Ok(Auth(identity))
        })
    }
}
