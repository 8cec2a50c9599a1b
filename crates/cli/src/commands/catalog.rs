//! Catalog browsing commands.

use atelier_core::ProductId;
use atelier_storefront::catalog::Product;
use atelier_storefront::listing::{ListingQuery, PriceRange, SortOrder, products_for_listing};
use atelier_storefront::state::AppState;
use rust_decimal::Decimal;

use super::CommandError;

/// Print the listing for a category, filtered and sorted.
#[allow(clippy::print_stdout)]
pub fn list(
    state: &AppState,
    category: &str,
    sort: &str,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
) {
    let defaults = PriceRange::default();
    let query = ListingQuery {
        sort: SortOrder::parse(sort),
        price_range: PriceRange::new(
            min_price.unwrap_or(defaults.min),
            max_price.unwrap_or(defaults.max),
        ),
        ..ListingQuery::for_category(category)
    };

    let products = products_for_listing(state.catalog().products(), &query);
    if products.is_empty() {
        println!("No products match your current filters.");
        return;
    }

    println!("{} products", products.len());
    for product in &products {
        println!("{}", listing_line(product));
    }
}

/// Print one product in full.
pub fn show(state: &AppState, id: i32) -> Result<(), CommandError> {
    let product = state
        .catalog()
        .get(ProductId::new(id))
        .ok_or(CommandError::UnknownProduct(id))?;
    print_product(product);
    Ok(())
}

fn listing_line(product: &Product) -> String {
    let badge = if product.is_new { "  [new]" } else { "" };
    format!(
        "#{:<3} {:<30} {:<12} {}{badge}",
        product.id.as_i32(),
        product.name,
        product.category.as_str(),
        product.price,
    )
}

#[allow(clippy::print_stdout)]
fn print_product(product: &Product) {
    println!("#{} {}", product.id, product.name);
    println!("  category: {}", product.category);
    println!("  price:    {}", product.price);
    if let Some(rating) = product.rating {
        println!("  rating:   {rating}/5");
    }
    if let Some(colors) = &product.colors {
        println!("  colors:   {}", colors.join(", "));
    }
    if let Some(sizes) = &product.sizes {
        println!("  sizes:    {}", sizes.join(", "));
    }
    if let Some(in_stock) = product.in_stock {
        println!(
            "  stock:    {}",
            if in_stock { "in stock" } else { "out of stock" }
        );
    }
    if product.on_sale == Some(true) {
        println!("  on sale");
    }
    if let Some(description) = &product.description {
        println!("\n  {description}");
    }
}
