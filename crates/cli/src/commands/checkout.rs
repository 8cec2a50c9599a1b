//! Demo checkout command.

use atelier_storefront::checkout::place_order;
use atelier_storefront::state::AppState;

/// Place the demo order: print the summary, then clear the cart.
#[allow(clippy::print_stdout)]
pub fn run(state: &mut AppState) {
    if state.cart().state().is_empty() {
        println!("Your cart is empty; nothing to check out.");
        return;
    }

    let summary = place_order(state.cart_mut());
    println!("Order placed (demo checkout - no payment was processed).");
    println!("  Subtotal  {}", summary.subtotal);
    println!("  Tax (7%)  {}", summary.tax);
    println!("  Shipping  {}", summary.shipping);
    println!("  Total     {}", summary.total);
    println!("Thank you for your purchase!");
}
