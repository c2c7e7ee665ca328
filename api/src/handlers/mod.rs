//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Request DTOs carry an
//! explicit `validate()` returning one entry per failing field; a
//! non-empty result short-circuits into the 400 validation response
//! before any service is reached.

pub mod credits;
pub mod customers;

pub use credits::{create_credit, get_credit, list_credits};
pub use customers::{create_customer, delete_customer, get_customer, update_customer};

use crate::error::ApiError;

/// Fail with a validation error when any field check failed
pub(crate) fn ensure_valid(errors: Vec<String>) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}
