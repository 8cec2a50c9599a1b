//! Unified error handling for the storefront core.
//!
//! There are no fatal errors inside the cart and listing logic itself:
//! invalid mutations degrade to silent no-ops and storage failures are
//! swallowed at the store boundary. What remains fallible is setup -
//! loading configuration and opening storage - which is what [`AppError`]
//! covers.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
