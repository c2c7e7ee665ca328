//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{Months, Utc};
use rust_decimal::Decimal;

use crate::domain::entities::{Address, Credit, CreditId, Customer, CustomerId, NewCredit, NewCustomer};
use uuid::Uuid;

/// Create a new-customer payload with default values
pub fn test_new_customer() -> NewCustomer {
    NewCustomer {
        first_name: "João".to_string(),
        last_name: "Santos".to_string(),
        cpf: "56255096033".to_string(),
        email: "mail@mail.mail".to_string(),
        income: Decimal::new(10000, 1),
        password: "348734".to_string(),
        address: Address {
            zip_code: "03289473".to_string(),
            street: "RUa".to_string(),
        },
    }
}

/// Create a new-customer payload with a specific cpf
pub fn test_new_customer_with_cpf(cpf: &str) -> NewCustomer {
    NewCustomer {
        cpf: cpf.to_string(),
        ..test_new_customer()
    }
}

/// Create a stored customer with default values and id 1
pub fn test_customer() -> Customer {
    test_customer_with_id(CustomerId(1))
}

/// Create a stored customer with a specific id
pub fn test_customer_with_id(id: CustomerId) -> Customer {
    let new_customer = test_new_customer();
    Customer {
        id,
        first_name: new_customer.first_name,
        last_name: new_customer.last_name,
        cpf: new_customer.cpf,
        email: new_customer.email,
        income: new_customer.income,
        password: new_customer.password,
        address: new_customer.address,
    }
}

/// Create a new-credit payload owned by the given customer, first
/// installment two months out
pub fn test_new_credit(customer_id: CustomerId) -> NewCredit {
    NewCredit::new(
        Decimal::new(4000, 1),
        Utc::now().date_naive() + Months::new(2),
        20,
        customer_id,
    )
}

/// Create a stored credit with default values
pub fn test_credit(id: CreditId, customer_id: CustomerId) -> Credit {
    let new_credit = test_new_credit(customer_id);
    Credit {
        id,
        credit_code: Uuid::new_v4(),
        credit_value: new_credit.credit_value,
        day_first_installment: new_credit.day_first_installment,
        number_of_installment: new_credit.number_of_installment,
        customer_id,
    }
}
