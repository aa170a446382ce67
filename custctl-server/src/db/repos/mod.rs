//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and runs exactly one statement
//! per operation. No multi-statement transactions.

pub mod customers;

pub use customers::CustomerRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
