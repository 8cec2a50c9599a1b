//! Atelier CLI - drives the storefront core from the terminal.
//!
//! The storefront has no web frontend in this repository; this binary is
//! the demo presentation layer over the catalog, cart, and checkout.
//!
//! # Usage
//!
//! ```bash
//! # Browse a category, sorted and filtered
//! atelier catalog list --category hoodies --sort price-low-high
//!
//! # Inspect a single product
//! atelier catalog show 3
//!
//! # Search the catalog
//! atelier search cashmere
//!
//! # Cart operations (persisted when ATELIER_DATA_DIR is set)
//! atelier cart add 3 --quantity 2
//! atelier cart show
//! atelier cart set-quantity 3 1
//! atelier cart remove 3
//! atelier cart clear
//!
//! # Demo checkout: prints the order summary and clears the cart
//! atelier checkout
//! ```
//!
//! # Environment Variables
//!
//! - `ATELIER_DATA_DIR` - Directory for the persisted cart slot. Without
//!   it the cart lives only for the duration of one invocation, which is
//!   mostly useful for scripting demos.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use atelier_storefront::config::StorefrontConfig;
use atelier_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about = "Atelier storefront demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Search products by name, category, or description
    Search {
        /// Search query
        query: String,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Demo checkout: print the order summary and clear the cart
    Checkout,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products for a category listing
    List {
        /// Category slug ("featured" lists everything)
        #[arg(short, long, default_value = "featured")]
        category: String,

        /// Sort order: newest, price-low-high, price-high-low
        #[arg(short, long, default_value = "newest")]
        sort: String,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<rust_decimal::Decimal>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<rust_decimal::Decimal>,
    },
    /// Show one product in full
    Show {
        /// Product id
        id: i32,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart with line totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        id: i32,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product's line from the cart
    Remove {
        /// Product id
        id: i32,
    },
    /// Set a line's quantity exactly
    SetQuantity {
        /// Product id
        id: i32,

        /// New quantity (values below 1 leave the cart unchanged)
        quantity: u32,
    },
    /// Empty the cart
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut state = AppState::new(config)?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                sort,
                min_price,
                max_price,
            } => commands::catalog::list(&state, &category, &sort, min_price, max_price),
            CatalogAction::Show { id } => commands::catalog::show(&state, id)?,
        },
        Commands::Search { query } => commands::search::run(&state, &query),
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add { id, quantity } => commands::cart::add(&mut state, id, quantity)?,
            CartAction::Remove { id } => commands::cart::remove(&mut state, id),
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(&mut state, id, quantity);
            }
            CartAction::Clear => commands::cart::clear(&mut state),
        },
        Commands::Checkout => commands::checkout::run(&mut state),
    }
    Ok(())
}
