//! Postgres adapters backed by SeaORM
//!
//! Each repository wraps a shared [`sea_orm::DatabaseConnection`] and
//! translates between the SeaORM models in `entity` and the domain
//! types. Unique constraint violations become
//! [`DomainError::Conflict`](crate::error::DomainError::Conflict); any
//! other database failure becomes `DomainError::Database`.

mod credit_repo;
mod customer_repo;

pub use credit_repo::PostgresCreditRepository;
pub use customer_repo::PostgresCustomerRepository;

use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

fn map_db_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => DomainError::Conflict(message),
        _ => DomainError::Database(err.to_string()),
    }
}
