//! The cart state machine and its persisted store.
//!
//! Cart state is advanced by a pure reducer over tagged commands; the
//! [`CartStore`] wraps the reducer with a storage slot so the cart survives
//! reloads. Derived totals are recomputed from the item list on every
//! transition and are never mutated independently.
//!
//! Invalid mutations (sub-1 quantity on update, unknown product ids) are
//! silent no-ops: that is the observable contract of the storefront, not an
//! error path.

use atelier_core::{CurrencyCode, Price, ProductId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Product;
use crate::storage::StorageBackend;

/// Fixed key the serialized cart is stored under.
pub const CART_STORAGE_KEY: &str = "cart";

/// One product entry in the cart paired with a quantity.
///
/// Serializes as the product's fields spread beside `quantity`, matching
/// the persisted cart shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.line_total(self.quantity)
    }
}

/// The full cart: line items in insertion order plus derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartLine>,
    /// Sum of price x quantity over all items. Derived, never set directly.
    pub subtotal: Price,
    /// Sum of quantities over all items. Derived, never set directly.
    pub item_count: u32,
}

impl Default for CartState {
    fn default() -> Self {
        Self::empty()
    }
}

impl CartState {
    /// The empty initial state.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::zero(CurrencyCode::default()),
            item_count: 0,
        }
    }

    /// Build a state from an item list, recomputing both totals.
    #[must_use]
    pub fn from_items(items: Vec<CartLine>) -> Self {
        let currency = items
            .first()
            .map_or_else(CurrencyCode::default, |line| line.product.price.currency_code);
        let subtotal = items
            .iter()
            .map(|line| line.line_total().amount)
            .sum::<rust_decimal::Decimal>();
        let item_count = items.iter().map(|line| line.quantity).sum();

        Self {
            items,
            subtotal: Price::new(subtotal, currency),
            item_count,
        }
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for a product id, if present.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.items.iter().find(|line| line.product.id == product_id)
    }

    /// Apply a command, producing the next state.
    ///
    /// Pure: the current state is never modified in place.
    #[must_use]
    pub fn apply(&self, command: &CartCommand) -> Self {
        match command {
            CartCommand::Add { product, quantity } => {
                let mut items = self.items.clone();
                if let Some(line) = items.iter_mut().find(|line| line.product.id == product.id) {
                    line.quantity += quantity;
                } else {
                    items.push(CartLine {
                        product: product.clone(),
                        quantity: *quantity,
                    });
                }
                Self::from_items(items)
            }
            CartCommand::Remove { product_id } => {
                let items = self
                    .items
                    .iter()
                    .filter(|line| line.product.id != *product_id)
                    .cloned()
                    .collect();
                Self::from_items(items)
            }
            CartCommand::UpdateQuantity {
                product_id,
                quantity,
            } => {
                // A sub-1 quantity rejects the whole update; removal is an
                // explicit command, never a side effect of an update.
                if *quantity < 1 {
                    return self.clone();
                }
                let items = self
                    .items
                    .iter()
                    .map(|line| {
                        if line.product.id == *product_id {
                            CartLine {
                                product: line.product.clone(),
                                quantity: *quantity,
                            }
                        } else {
                            line.clone()
                        }
                    })
                    .collect();
                Self::from_items(items)
            }
            CartCommand::Clear => Self::empty(),
        }
    }
}

/// A cart mutation, dispatched through the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Merge `quantity` units of a product into the cart.
    Add { product: Product, quantity: u32 },
    /// Delete a product's line. No-op when absent.
    Remove { product_id: ProductId },
    /// Set a line's quantity exactly. No-op when absent or `quantity < 1`.
    UpdateQuantity { product_id: ProductId, quantity: u32 },
    /// Reset to the empty initial state.
    Clear,
}

/// The authoritative cart for one client session.
///
/// Opens by loading the persisted slot once (missing or malformed data
/// degrades to the empty state), then writes the whole serialized state back
/// after every mutation. Storage failures are logged and swallowed: the
/// in-memory cart stays correct for the session either way.
pub struct CartStore {
    state: CartState,
    storage: Box<dyn StorageBackend>,
}

impl CartStore {
    /// Open the store over a storage backend, rehydrating any saved cart.
    #[must_use]
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let state = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<CartState>(&raw) {
                Ok(saved) => {
                    debug!(items = saved.items.len(), "cart rehydrated from storage");
                    // Totals are recomputed from the item list rather than
                    // trusted from the blob.
                    CartState::from_items(saved.items)
                }
                Err(e) => {
                    warn!(error = %e, "failed to parse saved cart, starting empty");
                    CartState::empty()
                }
            },
            Ok(None) => CartState::empty(),
            Err(e) => {
                warn!(error = %e, "failed to read saved cart, starting empty");
                CartState::empty()
            }
        };

        let mut store = Self { state, storage };
        store.persist();
        store
    }

    /// Merge `quantity` units of a product into the cart.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        self.dispatch(CartCommand::Add {
            product: product.clone(),
            quantity,
        });
    }

    /// Delete a product's line. Silent no-op when absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.dispatch(CartCommand::Remove { product_id });
    }

    /// Set a line's quantity exactly. Silent no-op when absent or below 1.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        self.dispatch(CartCommand::UpdateQuantity {
            product_id,
            quantity,
        });
    }

    /// Reset to the empty initial state.
    pub fn clear(&mut self) {
        self.dispatch(CartCommand::Clear);
    }

    /// Apply a command through the reducer and persist the result.
    pub fn dispatch(&mut self, command: CartCommand) {
        self.state = self.state.apply(&command);
        self.persist();
    }

    /// The current cart state, reflecting every mutation so far.
    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.state) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(CART_STORAGE_KEY, &raw) {
                    warn!(error = %e, "failed to persist cart, keeping in-memory state");
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to serialize cart, keeping in-memory state");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use atelier_core::Category;

    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::MemoryStorage;

    fn product(id: i32) -> Product {
        Catalog::demo()
            .get(ProductId::new(id))
            .expect("demo product exists")
            .clone()
    }

    fn usd(cents: i64) -> Price {
        Price::from_cents(cents, CurrencyCode::USD)
    }

    fn open_memory_store() -> CartStore {
        CartStore::open(Box::new(MemoryStorage::default()))
    }

    #[test]
    fn test_empty_state() {
        let state = CartState::empty();
        assert!(state.is_empty());
        assert_eq!(state.subtotal, usd(0));
        assert_eq!(state.item_count, 0);
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut store = open_memory_store();
        let hoodie = product(3);

        store.add_to_cart(&hoodie, 1);
        store.add_to_cart(&hoodie, 2);

        let state = store.state();
        assert_eq!(state.items.len(), 1, "same product must not split lines");
        let line = state.line(hoodie.id).expect("line exists");
        assert_eq!(line.quantity, 3);
        assert_eq!(state.subtotal, usd(47997));
        assert_eq!(state.item_count, 3);
    }

    #[test]
    fn test_totals_recomputed_after_every_mutation() {
        let mut store = open_memory_store();
        store.add_to_cart(&product(1), 2); // 89.99 x 2
        store.add_to_cart(&product(4), 1); // 49.99

        let state = store.state();
        assert_eq!(state.subtotal, usd(2 * 8999 + 4999));
        assert_eq!(state.item_count, 3);

        store.update_quantity(ProductId::new(1), 1);
        let state = store.state();
        assert_eq!(state.subtotal, usd(8999 + 4999));
        assert_eq!(state.item_count, 2);
    }

    #[test]
    fn test_update_quantity_below_one_leaves_state_unchanged() {
        let mut store = open_memory_store();
        store.add_to_cart(&product(1), 2);
        let before = store.state().clone();

        store.update_quantity(ProductId::new(1), 0);
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut store = open_memory_store();
        store.add_to_cart(&product(1), 2);
        let before = store.state().clone();

        store.update_quantity(ProductId::new(99), 5);
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = open_memory_store();
        store.add_to_cart(&product(1), 1);

        store.remove_from_cart(ProductId::new(1));
        assert!(store.state().is_empty());

        // Second removal of the same id is a silent no-op.
        store.remove_from_cart(ProductId::new(1));
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_clear_resets_to_initial_state() {
        let mut store = open_memory_store();
        store.add_to_cart(&product(1), 2);
        store.add_to_cart(&product(3), 1);

        store.clear();
        assert_eq!(store.state(), &CartState::empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = open_memory_store();
        store.add_to_cart(&product(5), 1);
        store.add_to_cart(&product(2), 1);
        store.add_to_cart(&product(9), 1);
        // Re-adding product 5 merges into its existing position.
        store.add_to_cart(&product(5), 1);

        let ids: Vec<i32> = store
            .state()
            .items
            .iter()
            .map(|line| line.product.id.as_i32())
            .collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_state_serde_roundtrip() {
        let mut store = open_memory_store();
        store.add_to_cart(&product(3), 2);
        store.add_to_cart(&product(13), 1);

        let raw = serde_json::to_string(store.state()).expect("serialize");
        let back: CartState = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(&back, store.state());
    }

    #[test]
    fn test_persisted_shape_spreads_product_fields() {
        let mut store = open_memory_store();
        store.add_to_cart(&product(3), 2);

        let value = serde_json::to_value(store.state()).expect("serialize");
        let line = &value["items"][0];
        assert_eq!(line["id"], serde_json::json!(3));
        assert_eq!(line["name"], serde_json::json!("Cashmere Blend Hoodie"));
        assert_eq!(line["category"], serde_json::json!("hoodies"));
        assert_eq!(line["quantity"], serde_json::json!(2));
        assert_eq!(value["itemCount"], serde_json::json!(2));
    }

    #[test]
    fn test_rehydrates_from_saved_slot() {
        let mut storage = MemoryStorage::default();
        {
            let mut seed = CartState::empty();
            seed = seed.apply(&CartCommand::Add {
                product: product(3),
                quantity: 3,
            });
            storage
                .set(
                    CART_STORAGE_KEY,
                    &serde_json::to_string(&seed).expect("serialize"),
                )
                .expect("seed storage");
        }

        let store = CartStore::open(Box::new(storage));
        let state = store.state();
        assert_eq!(state.item_count, 3);
        assert_eq!(state.subtotal, usd(47997));
    }

    #[test]
    fn test_malformed_slot_falls_back_to_empty() {
        let mut storage = MemoryStorage::default();
        storage
            .set(CART_STORAGE_KEY, "{not valid json")
            .expect("seed storage");

        let store = CartStore::open(Box::new(storage));
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_rehydration_recomputes_stale_totals() {
        // A blob whose stored totals disagree with its items: the item list wins.
        let mut tampered = CartState::from_items(vec![CartLine {
            product: product(4),
            quantity: 2,
        }]);
        tampered.subtotal = usd(1);
        tampered.item_count = 42;

        let mut storage = MemoryStorage::default();
        storage
            .set(
                CART_STORAGE_KEY,
                &serde_json::to_string(&tampered).expect("serialize"),
            )
            .expect("seed storage");

        let store = CartStore::open(Box::new(storage));
        assert_eq!(store.state().subtotal, usd(9998));
        assert_eq!(store.state().item_count, 2);
    }

    #[test]
    fn test_example_flow_from_empty_to_empty() {
        let mut store = open_memory_store();
        let hoodie = product(3);
        assert_eq!(hoodie.price, usd(15999));
        assert_eq!(hoodie.category, Category::Hoodies);

        store.add_to_cart(&hoodie, 1);
        assert_eq!(store.state().subtotal, usd(15999));
        assert_eq!(store.state().item_count, 1);

        store.add_to_cart(&hoodie, 2);
        let line = store.state().line(hoodie.id).expect("line exists");
        assert_eq!(line.quantity, 3);
        assert_eq!(store.state().subtotal, usd(47997));
        assert_eq!(store.state().item_count, 3);

        store.remove_from_cart(hoodie.id);
        assert!(store.state().is_empty());
    }
}
