//! Integration tests for Atelier.
//!
//! Exercises the storefront crates together the way a presentation layer
//! would: build an [`AppState`], mutate the cart, read listings back, and
//! reopen sessions over the same data directory to check persistence.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atelier-integration-tests
//! ```

use std::path::Path;

use atelier_storefront::config::StorefrontConfig;
use atelier_storefront::state::AppState;

/// Build a session whose cart persists under `data_dir`.
///
/// # Panics
///
/// Panics if the data directory cannot be opened; tests treat that as a
/// hard failure.
#[must_use]
pub fn file_backed_session(data_dir: &Path) -> AppState {
    let config = StorefrontConfig {
        data_dir: Some(data_dir.to_path_buf()),
        ..StorefrontConfig::in_memory()
    };
    AppState::new(config).expect("open session over data dir")
}

/// Build a session whose cart lives in memory only.
#[must_use]
pub fn memory_session() -> AppState {
    AppState::new(StorefrontConfig::in_memory()).expect("open in-memory session")
}
