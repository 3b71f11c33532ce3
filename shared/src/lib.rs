//! Shared types and models for the Vinoteca admin backend
//!
//! This crate contains the domain models, status enums and the pure
//! stock-allocation math used by the backend. It performs no I/O, so all of
//! the reconciliation logic here is directly unit-testable.

pub mod allocation;
pub mod models;
pub mod types;
pub mod validation;

pub use allocation::*;
pub use models::*;
pub use types::*;
pub use validation::*;
