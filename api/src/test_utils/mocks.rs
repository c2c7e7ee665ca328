//! In-memory implementations of the repository ports
//!
//! These store data in memory and allow tests to verify behavior,
//! including how many times each operation was invoked.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Credit, CreditId, Customer, CustomerId, NewCredit, NewCustomer};
use crate::domain::ports::{CreditRepository, CustomerRepository};
use crate::error::DomainError;

/// Shared invocation counter handed out by the in-memory repositories
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicU32>);

impl CallCounter {
    pub fn get(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }

    fn increment(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
    by_cpf: Arc<RwLock<HashMap<String, CustomerId>>>,
    next_id: Arc<RwLock<i64>>,
    find_by_id_calls: CallCounter,
    save_calls: CallCounter,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(RwLock::new(1)),
            ..Default::default()
        }
    }

    /// Pre-populate with a customer for testing
    pub fn with_customer(self, customer: Customer) -> Self {
        {
            let mut customers = self.customers.write().unwrap();
            let mut by_cpf = self.by_cpf.write().unwrap();
            let mut next_id = self.next_id.write().unwrap();

            *next_id = (*next_id).max(customer.id.0 + 1);
            by_cpf.insert(customer.cpf.clone(), customer.id);
            customers.insert(customer.id, customer);
        }
        self
    }

    pub fn find_by_id_calls(&self) -> CallCounter {
        self.find_by_id_calls.clone()
    }

    pub fn save_calls(&self) -> CallCounter {
        self.save_calls.clone()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn save(&self, new_customer: &NewCustomer) -> Result<Customer, DomainError> {
        self.save_calls.increment();

        let mut customers = self.customers.write().unwrap();
        let mut by_cpf = self.by_cpf.write().unwrap();

        if by_cpf.contains_key(&new_customer.cpf) {
            return Err(DomainError::Conflict(format!(
                "unique constraint violated: customers.cpf ({})",
                new_customer.cpf
            )));
        }

        let id = {
            let mut next_id = self.next_id.write().unwrap();
            let current = *next_id;
            *next_id += 1;
            CustomerId(current)
        };

        let customer = Customer {
            id,
            first_name: new_customer.first_name.clone(),
            last_name: new_customer.last_name.clone(),
            cpf: new_customer.cpf.clone(),
            email: new_customer.email.clone(),
            income: new_customer.income,
            password: new_customer.password.clone(),
            address: new_customer.address.clone(),
        };

        by_cpf.insert(customer.cpf.clone(), customer.id);
        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        self.find_by_id_calls.increment();
        let customers = self.customers.read().unwrap();
        Ok(customers.get(&id).cloned())
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().unwrap();
        if !customers.contains_key(&customer.id) {
            return Err(DomainError::Database(format!(
                "update of missing customer {}",
                customer.id
            )));
        }
        customers.insert(customer.id, customer.clone());
        Ok(customer.clone())
    }

    async fn delete(&self, id: CustomerId) -> Result<(), DomainError> {
        let mut customers = self.customers.write().unwrap();
        let mut by_cpf = self.by_cpf.write().unwrap();

        match customers.remove(&id) {
            Some(customer) => {
                by_cpf.remove(&customer.cpf);
                Ok(())
            }
            None => Err(DomainError::Database(format!(
                "delete of missing customer {}",
                id
            ))),
        }
    }
}

// ============================================================================
// In-Memory Credit Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCreditRepository {
    /// Insertion order preserved so list responses are deterministic
    credits: Arc<RwLock<Vec<Credit>>>,
    next_id: Arc<RwLock<i64>>,
    save_calls: CallCounter,
}

impl InMemoryCreditRepository {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(RwLock::new(1)),
            ..Default::default()
        }
    }

    /// Pre-populate with a credit for testing
    pub fn with_credit(self, credit: Credit) -> Self {
        {
            let mut credits = self.credits.write().unwrap();
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(credit.id.0 + 1);
            credits.push(credit);
        }
        self
    }

    pub fn save_calls(&self) -> CallCounter {
        self.save_calls.clone()
    }
}

#[async_trait]
impl CreditRepository for InMemoryCreditRepository {
    async fn save(&self, new_credit: &NewCredit) -> Result<Credit, DomainError> {
        self.save_calls.increment();

        let mut credits = self.credits.write().unwrap();

        if credits.iter().any(|c| c.credit_code == new_credit.credit_code) {
            return Err(DomainError::Conflict(format!(
                "unique constraint violated: credits.credit_code ({})",
                new_credit.credit_code
            )));
        }

        let id = {
            let mut next_id = self.next_id.write().unwrap();
            let current = *next_id;
            *next_id += 1;
            CreditId(current)
        };

        let credit = Credit {
            id,
            credit_code: new_credit.credit_code,
            credit_value: new_credit.credit_value,
            day_first_installment: new_credit.day_first_installment,
            number_of_installment: new_credit.number_of_installment,
            customer_id: new_credit.customer_id,
        };

        credits.push(credit.clone());
        Ok(credit)
    }

    async fn find_all_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Credit>, DomainError> {
        let credits = self.credits.read().unwrap();
        Ok(credits
            .iter()
            .filter(|c| c.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_credit_code(
        &self,
        credit_code: Uuid,
    ) -> Result<Option<Credit>, DomainError> {
        let credits = self.credits.read().unwrap();
        Ok(credits.iter().find(|c| c.credit_code == credit_code).cloned())
    }
}
