//! Application state handed to the presentation layer.

use tracing::{debug, info};

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::hero::HeroCarousel;
use crate::storage::{FileStorage, MemoryStorage, StorageBackend};

/// Everything one client session operates on.
///
/// An explicit store object with per-session scope: the presentation layer
/// receives it by reference instead of reaching for ambient globals, and it
/// is the sole mutator of its own cart.
pub struct AppState {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore,
    hero: HeroCarousel,
}

impl AppState {
    /// Wire up a session: demo catalog, cart store over the configured
    /// storage backend, hero deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured data directory cannot be opened.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let storage: Box<dyn StorageBackend> = match &config.data_dir {
            Some(dir) => {
                info!(path = %dir.display(), "using file-backed cart storage");
                Box::new(FileStorage::open(dir)?)
            }
            None => {
                debug!("using in-memory cart storage");
                Box::new(MemoryStorage::default())
            }
        };

        Ok(Self {
            catalog: Catalog::demo(),
            cart: CartStore::open(storage),
            hero: HeroCarousel::demo(),
            config,
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get a mutable reference to the cart store.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Get a reference to the hero carousel.
    #[must_use]
    pub fn hero(&self) -> &HeroCarousel {
        &self.hero
    }

    /// Get a mutable reference to the hero carousel.
    pub fn hero_mut(&mut self) -> &mut HeroCarousel {
        &mut self.hero
    }
}
