//! Customer domain entity
//!
//! A customer applying for credit, with an embedded address. The cpf is a
//! globally unique fiscal identifier; uniqueness is enforced by the store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address value object, owned 1:1 by its customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

/// A customer with a store-assigned id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    /// Never serialized into API responses
    #[serde(skip_serializing)]
    pub password: String,
    pub address: Address,
}

impl Customer {
    /// Apply a partial update. Only the fields carried by the patch change;
    /// cpf, email, password and id are untouched.
    pub fn apply(&mut self, patch: CustomerPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(income) = patch.income {
            self.income = income;
        }
        if let Some(zip_code) = patch.zip_code {
            self.address.zip_code = zip_code;
        }
        if let Some(street) = patch.street {
            self.address.street = street;
        }
    }
}

/// Data needed to create a new customer; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    pub password: String,
    pub address: Address,
}

/// Partial update for a customer; absent fields are left as stored
#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub income: Option<Decimal>,
    pub zip_code: Option<String>,
    pub street: Option<String>,
}
