//! Credit service
//!
//! Orchestration for credit proposals: creation with the installment date
//! rule, listing by customer, and lookup by credit code with an ownership
//! check. Customer resolution goes through `CustomerService` so an unknown
//! customer id fails exactly like a direct lookup would.

use std::sync::Arc;

use chrono::{Months, Utc};
use uuid::Uuid;

use crate::app::CustomerService;
use crate::domain::entities::{Credit, CustomerId, NewCredit};
use crate::domain::ports::{CreditRepository, CustomerRepository};
use crate::error::DomainError;

/// The first installment may be at most this many months after creation
const MAX_MONTHS_TO_FIRST_INSTALLMENT: u32 = 3;

/// Service for managing credit proposals
pub struct CreditService<R, CR>
where
    R: CreditRepository,
    CR: CustomerRepository,
{
    credits: Arc<R>,
    customers: Arc<CustomerService<CR>>,
}

impl<R, CR> CreditService<R, CR>
where
    R: CreditRepository,
    CR: CustomerRepository,
{
    pub fn new(credits: Arc<R>, customers: Arc<CustomerService<CR>>) -> Self {
        Self { credits, customers }
    }

    /// Create a credit proposal.
    ///
    /// The installment date invariant is checked before any store access;
    /// then the owning customer is resolved (propagating its not-found
    /// failure) and the credit is persisted.
    pub async fn save(&self, credit: NewCredit) -> Result<Credit, DomainError> {
        validate_day_first_installment(&credit)?;
        self.customers.find_by_id(credit.customer_id).await?;
        self.credits.save(&credit).await
    }

    /// Every credit owned by the given customer; an empty list is not an error
    pub async fn find_all_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Credit>, DomainError> {
        self.credits.find_all_by_customer_id(customer_id).await
    }

    /// Look a credit up by its code and verify it belongs to the claimed
    /// customer. A missing code and a code owned by someone else are
    /// distinct failures.
    pub async fn find_by_credit_code(
        &self,
        customer_id: CustomerId,
        credit_code: Uuid,
    ) -> Result<Credit, DomainError> {
        let credit = self
            .credits
            .find_by_credit_code(credit_code)
            .await?
            .ok_or_else(|| {
                DomainError::Business(format!("Creditcode {} not found", credit_code))
            })?;

        if credit.customer_id != customer_id {
            return Err(DomainError::InvalidArgument("Contact admin".to_string()));
        }

        Ok(credit)
    }
}

fn validate_day_first_installment(credit: &NewCredit) -> Result<(), DomainError> {
    let limit = Utc::now().date_naive() + Months::new(MAX_MONTHS_TO_FIRST_INSTALLMENT);
    if credit.day_first_installment > limit {
        return Err(DomainError::Business("Invalid Date".to_string()));
    }
    Ok(())
}
