//! Customer service
//!
//! CRUD orchestration for customers. Thin delegation to the repository
//! port; an unknown id is a business rule violation (HTTP 400 at the
//! boundary), not a 404.

use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerId, CustomerPatch, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::error::DomainError;

/// Service for managing customers
pub struct CustomerService<R>
where
    R: CustomerRepository,
{
    customers: Arc<R>,
}

impl<R> CustomerService<R>
where
    R: CustomerRepository,
{
    pub fn new(customers: Arc<R>) -> Self {
        Self { customers }
    }

    /// Persist a new customer. The store enforces cpf uniqueness; there is
    /// no pre-check here, a duplicate surfaces as `DomainError::Conflict`.
    pub async fn save(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        self.customers.save(&customer).await
    }

    /// Look a customer up by id, failing with a business error on a miss
    pub async fn find_by_id(&self, id: CustomerId) -> Result<Customer, DomainError> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Business(format!("Id {} not found", id)))
    }

    /// Apply a partial update to an existing customer. Only first name,
    /// last name, income and the address fields can change; cpf, email,
    /// password and id are frozen.
    pub async fn update(
        &self,
        id: CustomerId,
        patch: CustomerPatch,
    ) -> Result<Customer, DomainError> {
        let mut customer = self.find_by_id(id).await?;
        customer.apply(patch);
        self.customers.update(&customer).await
    }

    /// Delete a customer, going through the existence check first so an
    /// unknown id fails the same way as `find_by_id`
    pub async fn delete_by_id(&self, id: CustomerId) -> Result<(), DomainError> {
        let customer = self.find_by_id(id).await?;
        self.customers.delete(customer.id).await
    }
}
