use crate::domain::error::DomainError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

// Uniform error response format
#[derive(Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    /// A collaborator failed; `details` carries its message.
    #[error("{message}")]
    Internal {
        message: &'static str,
        details: String,
    },
}

impl ApiError {
    /// Maps a controller error for the operation whose 500 message is `context`.
    pub fn from_failure(err: anyhow::Error, context: &'static str) -> Self {
        let Some(domain) = err.downcast_ref::<DomainError>() else {
            return ApiError::Internal {
                message: context,
                details: err.to_string(),
            };
        };
        let message = domain.to_string();
        match domain {
            DomainError::MissingUserFields
            | DomainError::EmailAlreadyRegistered
            | DomainError::MissingCredentials
            | DomainError::InvalidId => ApiError::BadRequest(message),
            DomainError::InvalidCredentials => ApiError::Unauthorized(message),
            DomainError::UserNotFound => ApiError::NotFound(message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            ApiError::BadRequest(msg) | ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => {
                warn!(error = %msg, status = %status, "Request rejected");
                ErrorResponse {
                    error: msg,
                    details: None,
                }
            }
            ApiError::Internal { message, details } => {
                error!(error = %message, details = %details, status = %status, "Request failed");
                ErrorResponse {
                    error: message,
                    details: Some(details.as_str()),
                }
            }
        };
        HttpResponse::build(status).json(body)
    }
}
