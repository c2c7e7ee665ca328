//! Postgres-backed credit repository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Credit, CreditId, CustomerId, NewCredit};
use crate::domain::ports::CreditRepository;
use crate::entity::credits;
use crate::error::DomainError;

use super::map_db_err;

pub struct PostgresCreditRepository {
    db: DatabaseConnection,
}

impl PostgresCreditRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CreditRepository for PostgresCreditRepository {
    async fn save(&self, credit: &NewCredit) -> Result<Credit, DomainError> {
        let model = credits::ActiveModel {
            credit_code: Set(credit.credit_code),
            credit_value: Set(credit.credit_value),
            day_first_installment: Set(credit.day_first_installment),
            number_of_installment: Set(credit.number_of_installment),
            customer_id: Set(credit.customer_id.0),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(saved.into())
    }

    async fn find_all_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Credit>, DomainError> {
        let found = credits::Entity::find()
            .filter(credits::Column::CustomerId.eq(customer_id.0))
            .order_by_asc(credits::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(found.into_iter().map(Credit::from).collect())
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>, DomainError> {
        let found = credits::Entity::find()
            .filter(credits::Column::CreditCode.eq(credit_code))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(found.map(Credit::from))
    }
}

/// Convert SeaORM model to domain entity
impl From<credits::Model> for Credit {
    fn from(model: credits::Model) -> Self {
        Credit {
            id: CreditId(model.id),
            credit_code: model.credit_code,
            credit_value: model.credit_value,
            day_first_installment: model.day_first_installment,
            number_of_installment: model.number_of_installment,
            customer_id: CustomerId(model.customer_id),
        }
    }
}
