use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Per-field validation messages collected while checking a request
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Validation(BTreeMap<String, Vec<String>>);

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F: ToString, M: ToString>(&mut self, field: F, message: M) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was collected, the collected messages otherwise
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(self))
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("Validation failed")]
    Validation(Validation),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("{message}")]
    InternalServerError { message: String },
}

impl Error {
    pub fn bad_request<T: ToString>(message: T) -> Self {
        Self::BadRequest {
            message: message.to_string(),
        }
    }

    pub fn unauthorized<T: ToString>(message: T) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
        }
    }

    pub fn forbidden<T: ToString>(message: T) -> Self {
        Self::Forbidden {
            message: message.to_string(),
        }
    }

    pub fn not_found<T: ToString>(message: T) -> Self {
        Self::NotFound {
            message: message.to_string(),
        }
    }

    pub fn internal<T: ToString>(message: T) -> Self {
        Self::InternalServerError {
            message: message.to_string(),
        }
    }
}

/// JSON body of every error response
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Restaurant not found")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Validation>,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest { .. } | Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Error::Forbidden { .. } => StatusCode::FORBIDDEN,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::InternalServerError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Error::Validation(validation) => ErrorResponse {
                message: self.to_string(),
                errors: Some(validation.clone()),
            },
            Error::Database(e) => {
                ::tracing::error!(error = %e, "Database operation failed");

                ErrorResponse {
                    message: "Internal server error".to_string(),
                    errors: None,
                }
            }
            _ => ErrorResponse {
                message: self.to_string(),
                errors: None,
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
