//! Error types for the credit application API
//!
//! Two layers:
//! - `DomainError`: business and persistence failures raised by services and ports
//! - `ApiError`: handler-level errors, translated to the fixed JSON error body
//!
//! Every failure response carries the same shape:
//! `{ title, timestamp, status, exception, details }` with a non-empty
//! `details` array. Unknown ids are business errors mapped to 400, not 404.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

const BAD_REQUEST_TITLE: &str = "Bad Request! Consult the documentation";
const CONFLICT_TITLE: &str = "Conflict! Consult the documentation";
const INTERNAL_TITLE: &str = "Internal Server Error! Consult the documentation";

/// Domain layer errors raised by services and repository ports
#[derive(Debug, Error)]
pub enum DomainError {
    /// Business rule violation: unknown id, installment date out of range
    #[error("{0}")]
    Business(String),

    /// An argument that passed field validation but is inconsistent with
    /// stored data (e.g. credit code owned by another customer)
    #[error("{0}")]
    InvalidArgument(String),

    /// Unique key violation surfaced by the store (cpf, credit code)
    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Handler-level errors, converted to HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Request field validation failures, one entry per failing field
    #[error("request validation failed")]
    Validation(Vec<String>),
}

/// Fixed error body shape shared by all failure responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub title: String,
    pub timestamp: String,
    pub status: u16,
    pub exception: String,
    pub details: Vec<String>,
}

impl ApiError {
    /// Fully-qualified failure kind carried in the `exception` field
    fn exception(&self) -> &'static str {
        match self {
            ApiError::Domain(DomainError::Business(_)) => {
                "credit_api::error::BusinessRuleViolation"
            }
            ApiError::Domain(DomainError::InvalidArgument(_)) => {
                "credit_api::error::InvalidArgument"
            }
            ApiError::Domain(DomainError::Conflict(_)) => {
                "credit_api::error::DataIntegrityViolation"
            }
            ApiError::Domain(DomainError::Database(_)) => "credit_api::error::DatabaseError",
            ApiError::Validation(_) => "credit_api::error::RequestValidationFailure",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let exception = self.exception().to_string();

        let (status, title, details) = match self {
            ApiError::Domain(DomainError::Business(msg))
            | ApiError::Domain(DomainError::InvalidArgument(msg)) => {
                (StatusCode::BAD_REQUEST, BAD_REQUEST_TITLE, vec![msg])
            }
            ApiError::Domain(DomainError::Conflict(msg)) => {
                (StatusCode::CONFLICT, CONFLICT_TITLE, vec![msg])
            }
            ApiError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_TITLE,
                    vec!["Unexpected persistence failure".to_string()],
                )
            }
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, BAD_REQUEST_TITLE, errors),
        };

        let body = Json(ErrorBody {
            title: title.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            status: status.as_u16(),
            exception,
            details,
        });

        (status, body).into_response()
    }
}
