//! Domain entities
//!
//! Pure domain models for the credit application domain.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod credit;
pub mod customer;

pub use credit::{Credit, CreditId, NewCredit};
pub use customer::{Address, Customer, CustomerId, CustomerPatch, NewCustomer};
