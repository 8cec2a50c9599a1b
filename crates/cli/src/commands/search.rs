//! Catalog search command.

use atelier_storefront::search::search_catalog;
use atelier_storefront::state::AppState;

/// Search the catalog and print matches.
#[allow(clippy::print_stdout)]
pub fn run(state: &AppState, query: &str) {
    let results = search_catalog(state.catalog().products(), query);
    if results.is_empty() {
        println!("No products found for \"{}\"", results.query);
        return;
    }

    println!("{} products for \"{}\"", results.len(), results.query);
    for product in &results.products {
        println!(
            "#{:<3} {:<30} {:<12} {}",
            product.id.as_i32(),
            product.name,
            product.category.as_str(),
            product.price,
        );
    }
}
