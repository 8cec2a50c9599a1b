//! Atelier Core - Shared types library.
//!
//! This crate provides common types used across all Atelier components:
//! - `storefront` - The storefront domain library (catalog, cart, listing)
//! - `cli` - Command-line demo driver
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage
//! access, no clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
