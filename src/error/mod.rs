//! Unified error handling for Siteimprove Core

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed entity: {0}")]
    MalformedEntity(String),

    #[error("Unknown domain plugin: {0}")]
    UnknownDomainPlugin(String),

    #[error("Token request failed: {0}")]
    TokenRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::MalformedEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "malformed_entity",
                msg.clone(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::UnknownDomainPlugin(id) => {
                tracing::error!("Unknown domain plugin: {}", id);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "domain_plugin_error",
                    format!("Domain plugin '{}' is not registered", id),
                )
            }
            AppError::TokenRequest(_) => (
                StatusCode::BAD_GATEWAY,
                "token_error",
                "There was an error requesting a new token.".to_string(),
            ),
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "config_error",
                    "The service is misconfigured".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
