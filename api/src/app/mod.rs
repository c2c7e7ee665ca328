//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod credit_service;
pub mod customer_service;

pub use credit_service::CreditService;
pub use customer_service::CustomerService;
