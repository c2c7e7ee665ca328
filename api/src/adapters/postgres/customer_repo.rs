//! Postgres-backed customer repository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{Address, Customer, CustomerId, NewCustomer};
use crate::domain::ports::CustomerRepository;
use crate::entity::customers;
use crate::error::DomainError;

use super::map_db_err;

pub struct PostgresCustomerRepository {
    db: DatabaseConnection,
}

impl PostgresCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn save(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let model = customers::ActiveModel {
            first_name: Set(customer.first_name.clone()),
            last_name: Set(customer.last_name.clone()),
            cpf: Set(customer.cpf.clone()),
            email: Set(customer.email.clone()),
            income: Set(customer.income),
            password: Set(customer.password.clone()),
            zip_code: Set(customer.address.zip_code.clone()),
            street: Set(customer.address.street.clone()),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let found = customers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(found.map(Customer::from))
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let model = customers::ActiveModel {
            id: Set(customer.id.0),
            first_name: Set(customer.first_name.clone()),
            last_name: Set(customer.last_name.clone()),
            cpf: Set(customer.cpf.clone()),
            email: Set(customer.email.clone()),
            income: Set(customer.income),
            password: Set(customer.password.clone()),
            zip_code: Set(customer.address.zip_code.clone()),
            street: Set(customer.address.street.clone()),
        };

        let updated = model.update(&self.db).await.map_err(map_db_err)?;
        Ok(updated.into())
    }

    async fn delete(&self, id: CustomerId) -> Result<(), DomainError> {
        customers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Customer {
            id: CustomerId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            cpf: model.cpf,
            email: model.email,
            income: model.income,
            password: model.password,
            address: Address {
                zip_code: model.zip_code,
                street: model.street,
            },
        }
    }
}
