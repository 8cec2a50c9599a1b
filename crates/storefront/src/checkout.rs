//! Demo checkout.
//!
//! There is no payment processing: checkout computes a fixed-rate order
//! summary and clears the cart. The rates are demo constants, not a tax
//! engine.

use std::sync::LazyLock;

use atelier_core::Price;
use rust_decimal::Decimal;

use crate::cart::{CartState, CartStore};

/// Demo sales-tax rate applied to the subtotal (7%).
static TAX_RATE: LazyLock<Decimal> = LazyLock::new(|| Decimal::new(7, 2));

/// Flat shipping fee charged whenever the cart holds at least one item.
static FLAT_SHIPPING: LazyLock<Decimal> = LazyLock::new(|| Decimal::new(599, 2));

/// The order summary shown before (and returned by) checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Price,
    /// 7% of the subtotal, rounded to cents.
    pub tax: Price,
    /// $5.99 flat, or zero for an empty cart.
    pub shipping: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Compute the summary for the current cart state.
    #[must_use]
    pub fn for_cart(cart: &CartState) -> Self {
        let currency = cart.subtotal.currency_code;
        let tax = (cart.subtotal.amount * *TAX_RATE).round_dp(2);
        let shipping = if cart.item_count > 0 {
            *FLAT_SHIPPING
        } else {
            Decimal::ZERO
        };
        let total = cart.subtotal.amount + tax + shipping;

        Self {
            subtotal: cart.subtotal,
            tax: Price::new(tax, currency),
            shipping: Price::new(shipping, currency),
            total: Price::new(total, currency),
        }
    }
}

/// Complete the demo checkout: capture the summary, then clear the cart.
///
/// The simulated processing delay belongs to the presentation layer; the
/// core effect is exactly "summarize and reset".
pub fn place_order(store: &mut CartStore) -> OrderSummary {
    let summary = OrderSummary::for_cart(store.state());
    store.clear();
    summary
}

#[cfg(test)]
mod tests {
    use atelier_core::{CurrencyCode, ProductId};

    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::MemoryStorage;

    fn usd(cents: i64) -> Price {
        Price::from_cents(cents, CurrencyCode::USD)
    }

    #[test]
    fn test_summary_applies_fixed_rates() {
        let catalog = Catalog::demo();
        let mut store = CartStore::open(Box::new(MemoryStorage::default()));
        let hoodie = catalog.get(ProductId::new(3)).expect("product 3");
        store.add_to_cart(hoodie, 2); // 159.99 x 2 = 319.98

        let summary = OrderSummary::for_cart(store.state());
        assert_eq!(summary.subtotal, usd(31998));
        // 7% of 319.98 = 22.3986, rounded to 22.40.
        assert_eq!(summary.tax, usd(2240));
        assert_eq!(summary.shipping, usd(599));
        assert_eq!(summary.total, usd(31998 + 2240 + 599));
    }

    #[test]
    fn test_empty_cart_pays_no_shipping() {
        let summary = OrderSummary::for_cart(&CartState::empty());
        assert_eq!(summary.subtotal, usd(0));
        assert_eq!(summary.tax, usd(0));
        assert_eq!(summary.shipping, usd(0));
        assert_eq!(summary.total, usd(0));
    }

    #[test]
    fn test_place_order_clears_the_cart() {
        let catalog = Catalog::demo();
        let mut store = CartStore::open(Box::new(MemoryStorage::default()));
        let belt = catalog.get(ProductId::new(10)).expect("product 10");
        store.add_to_cart(belt, 1);

        let summary = place_order(&mut store);
        assert_eq!(summary.subtotal, usd(6999));
        assert_eq!(store.state(), &CartState::empty());

        // Checking out an empty cart is harmless.
        let empty_summary = place_order(&mut store);
        assert_eq!(empty_summary.total, usd(0));
    }
}
