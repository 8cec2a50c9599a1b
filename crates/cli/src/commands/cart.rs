//! Cart commands.

use atelier_core::ProductId;
use atelier_storefront::cart::CartState;
use atelier_storefront::checkout::OrderSummary;
use atelier_storefront::state::AppState;

use super::CommandError;

/// Print the cart with line totals and the running summary.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState) {
    let cart = state.cart().state();
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for line in &cart.items {
        println!(
            "#{:<3} {:<30} {:>3} x {:<10} {}",
            line.product.id.as_i32(),
            line.product.name,
            line.quantity,
            line.product.price.to_string(),
            line.line_total(),
        );
    }
    print_summary(cart);
}

/// Add a product to the cart by id.
pub fn add(state: &mut AppState, id: i32, quantity: u32) -> Result<(), CommandError> {
    let product = state
        .catalog()
        .get(ProductId::new(id))
        .ok_or(CommandError::UnknownProduct(id))?
        .clone();

    state.cart_mut().add_to_cart(&product, quantity);
    confirm(state, &format!("Added {} x {}", quantity, product.name));
    Ok(())
}

/// Remove a product's line. Removing an absent id is not an error.
pub fn remove(state: &mut AppState, id: i32) {
    state.cart_mut().remove_from_cart(ProductId::new(id));
    confirm(state, &format!("Removed product {id}"));
}

/// Set a line's quantity exactly.
pub fn set_quantity(state: &mut AppState, id: i32, quantity: u32) {
    state.cart_mut().update_quantity(ProductId::new(id), quantity);
    confirm(state, &format!("Set product {id} quantity to {quantity}"));
}

/// Empty the cart.
pub fn clear(state: &mut AppState) {
    state.cart_mut().clear();
    confirm(state, "Cart cleared");
}

#[allow(clippy::print_stdout)]
fn confirm(state: &AppState, message: &str) {
    let cart = state.cart().state();
    println!(
        "{message} - {} item(s), subtotal {}",
        cart.item_count, cart.subtotal
    );
}

#[allow(clippy::print_stdout)]
fn print_summary(cart: &CartState) {
    let summary = OrderSummary::for_cart(cart);
    println!();
    println!("  Subtotal  {}", summary.subtotal);
    println!("  Tax (7%)  {}", summary.tax);
    println!("  Shipping  {}", summary.shipping);
    println!("  Total     {}", summary.total);
}
