//! AuthRelay Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AuthorizeError {
    /// Request-rejection: missing/blank/unsupported `response_type`, or a
    /// `redirect_uri` outside the application's authorized callback list.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// The resolved application carries no authorized callback URIs.
    /// A missing application collapses into this same kind.
    #[error("Application must be configured with at least one authorized callback uri")]
    MisconfiguredApplication,

    /// Provider endpoint construction failed (provider misconfiguration).
    #[error("Provider error: {message}")]
    Provider { message: String },

    /// Infrastructure failure in an injected resolver.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AuthorizeError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest { message: message.into() }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, AuthorizeError>;

/// Error response body
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AuthorizeError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            AuthorizeError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            AuthorizeError::MisconfiguredApplication => {
                (StatusCode::BAD_REQUEST, "MISCONFIGURED_APPLICATION")
            }
            AuthorizeError::Provider { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "PROVIDER_ERROR")
            }
            AuthorizeError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
