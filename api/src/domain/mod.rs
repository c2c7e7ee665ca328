//! Domain layer
//!
//! Pure credit-application business logic with no framework or store
//! dependencies.
//! - `entities`: customers, addresses and credit proposals
//! - `ports`: repository traits the adapters implement

pub mod entities;
pub mod ports;
