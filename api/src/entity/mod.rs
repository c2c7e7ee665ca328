//! SeaORM entity models
//!
//! Database-facing models, separate from the domain entities in
//! `domain::entities`. The adapters own the conversions into the
//! domain types.

pub mod credits;
pub mod customers;
