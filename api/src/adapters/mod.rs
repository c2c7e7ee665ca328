//! Outbound adapters
//!
//! Concrete implementations of the repository ports declared in
//! `domain::ports`.

pub mod postgres;

pub use postgres::{PostgresCreditRepository, PostgresCustomerRepository};
