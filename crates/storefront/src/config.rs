//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ATELIER_DATA_DIR` - Directory for file-backed cart persistence.
//!   When unset, cart state lives in memory for the session only.
//! - `ATELIER_HERO_INTERVAL_SECS` - Hero carousel rotation interval in
//!   seconds (default: 5, minimum: 1)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_HERO_INTERVAL_SECS: u64 = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Data directory for persisted state; `None` keeps state in memory.
    pub data_dir: Option<PathBuf>,
    /// How often the hero carousel rotates.
    pub hero_interval: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = get_optional_env("ATELIER_DATA_DIR").map(PathBuf::from);

        let hero_secs = get_env_or_default(
            "ATELIER_HERO_INTERVAL_SECS",
            &DEFAULT_HERO_INTERVAL_SECS.to_string(),
        );
        let hero_secs = hero_secs.parse::<u64>().map_err(|e| {
            ConfigError::InvalidEnvVar("ATELIER_HERO_INTERVAL_SECS".to_string(), e.to_string())
        })?;
        if hero_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "ATELIER_HERO_INTERVAL_SECS".to_string(),
                "must be at least 1 second".to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            hero_interval: Duration::from_secs(hero_secs),
        })
    }

    /// A configuration with no data directory: state stays in memory.
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            data_dir: None,
            hero_interval: Duration::from_secs(DEFAULT_HERO_INTERVAL_SECS),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_defaults() {
        let config = StorefrontConfig::in_memory();
        assert!(config.data_dir.is_none());
        assert_eq!(config.hero_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_default_matches_in_memory() {
        let config = StorefrontConfig::default();
        assert!(config.data_dir.is_none());
    }
}
