//! Credit domain entity
//!
//! A credit proposal belonging to exactly one customer. The credit code is
//! generated at creation and is the externally addressable handle; the
//! numeric id stays internal to the store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CustomerId;

/// Store-assigned identifier for a credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreditId(pub i64);

impl From<i64> for CreditId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CreditId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted credit proposal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credit {
    pub id: CreditId,
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installment: i32,
    pub customer_id: CustomerId,
}

/// Data needed to create a new credit; the store assigns the id, the
/// credit code is generated here and never reassigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewCredit {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installment: i32,
    pub customer_id: CustomerId,
}

impl NewCredit {
    pub fn new(
        credit_value: Decimal,
        day_first_installment: NaiveDate,
        number_of_installment: i32,
        customer_id: CustomerId,
    ) -> Self {
        Self {
            credit_code: Uuid::new_v4(),
            credit_value,
            day_first_installment,
            number_of_installment,
            customer_id,
        }
    }
}
