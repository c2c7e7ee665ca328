//! Test utilities
//!
//! Manual in-memory implementations of the repository ports and test
//! fixtures. The in-memory stores behave like the real thing for the
//! properties the services rely on: sequential id assignment starting at
//! 1, cpf/credit-code uniqueness, read-after-write visibility. They also
//! count calls so service tests can verify exactly-once delegation.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
