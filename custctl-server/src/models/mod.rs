//! Domain models
//!
//! Request input is checked for shape only: integer path ids and
//! well-formed JSON bodies. Invalid input returns ValidationError, not panic.

pub mod customer;
pub mod validation;

pub use customer::{Customer, CustomerDraft, CustomerId};
pub use validation::ValidationError;
