//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

/// Errors shared by commands that look up products.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// No catalog product carries the given id.
    #[error("No product with id {0}")]
    UnknownProduct(i32),
}
