//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! The store owns id assignment and uniqueness enforcement: `save`
//! returns the entity with its id populated, and a duplicate unique key
//! (cpf, credit code) surfaces as `DomainError::Conflict`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{
    Credit, Customer, CustomerId, NewCredit, NewCustomer,
};
use crate::error::DomainError;

/// Repository for Customer entities
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer, returning it with the store-assigned id.
    /// A duplicate cpf fails with `DomainError::Conflict`.
    async fn save(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;

    /// Find a customer by id
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Persist changes to an existing customer (never creates a record)
    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError>;

    /// Delete a customer; owned credits go with it
    async fn delete(&self, id: CustomerId) -> Result<(), DomainError>;
}

/// Repository for Credit entities
#[async_trait]
pub trait CreditRepository: Send + Sync {
    /// Insert a new credit, returning it with the store-assigned id
    async fn save(&self, credit: &NewCredit) -> Result<Credit, DomainError>;

    /// All credits owned by the given customer, store order
    async fn find_all_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Credit>, DomainError>;

    /// Find a credit by its unique credit code
    async fn find_by_credit_code(&self, credit_code: Uuid)
        -> Result<Option<Credit>, DomainError>;
}
