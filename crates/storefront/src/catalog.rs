//! The product catalog.
//!
//! Sixteen fixed demo products, defined at process start and never
//! mutated. The catalog is the single source every read path (listing,
//! search, product detail, cart additions) draws from.

use std::sync::Arc;

use atelier_core::{Category, CurrencyCode, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A purchasable product record.
///
/// Catalog-owned and immutable. Optional fields mirror the uneven shape of
/// the demo data: not every product carries colors, sizes, or sale status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub image: String,
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,
    /// Average review rating, 0-5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

/// The fixed, read-only product catalog.
///
/// Cheaply cloneable; the product list is shared behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Create a catalog from an explicit product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// The sixteen-product demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_products())
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Price helper for the demo data: cents in USD.
fn usd(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::USD)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// The demo product data.
#[allow(clippy::too_many_lines)]
fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Slim Fit Cotton Shirt".to_string(),
            price: usd(8999),
            category: Category::Shirts,
            image: "/placeholder.png".to_string(),
            is_new: true,
            description: Some(
                "Crafted from premium cotton, this slim-fit shirt offers both comfort and \
                 elegance. Perfect for formal occasions or a polished casual look."
                    .to_string(),
            ),
            colors: Some(strings(&["White", "Blue", "Black"])),
            sizes: Some(strings(&["S", "M", "L", "XL"])),
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.8),
        },
        Product {
            id: ProductId::new(2),
            name: "Tailored Wool Trousers".to_string(),
            price: usd(12999),
            category: Category::Pants,
            image: "/placeholder.png".to_string(),
            is_new: true,
            description: Some(
                "These tailored wool trousers combine timeless style with modern comfort. \
                 The perfect foundation for your professional wardrobe."
                    .to_string(),
            ),
            colors: Some(strings(&["Black", "Gray", "Navy"])),
            sizes: Some(strings(&["29", "30", "32", "34", "36"])),
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.7),
        },
        Product {
            id: ProductId::new(3),
            name: "Cashmere Blend Hoodie".to_string(),
            price: usd(15999),
            category: Category::Hoodies,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Luxurious cashmere blend hoodie offering exceptional warmth and softness. \
                 Elevate your casual wear with this premium essential."
                    .to_string(),
            ),
            colors: Some(strings(&["Gray", "Black", "Beige"])),
            sizes: Some(strings(&["S", "M", "L", "XL"])),
            in_stock: Some(true),
            on_sale: Some(true),
            rating: Some(4.9),
        },
        Product {
            id: ProductId::new(4),
            name: "Leather Card Holder".to_string(),
            price: usd(4999),
            category: Category::Accessories,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Minimalist leather card holder with multiple slots. Made from full-grain \
                 leather that develops a beautiful patina over time."
                    .to_string(),
            ),
            colors: Some(strings(&["Brown", "Black"])),
            sizes: None,
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.6),
        },
        Product {
            id: ProductId::new(5),
            name: "Premium Linen Shirt".to_string(),
            price: usd(9999),
            category: Category::Shirts,
            image: "/placeholder.png".to_string(),
            is_new: true,
            description: Some(
                "Breathable linen shirt perfect for warmer days. Relaxed fit with natural \
                 texture for a sophisticated casual look."
                    .to_string(),
            ),
            colors: Some(strings(&["White", "Blue", "Beige"])),
            sizes: Some(strings(&["S", "M", "L", "XL", "XXL"])),
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.7),
        },
        Product {
            id: ProductId::new(6),
            name: "Merino Wool Beanie".to_string(),
            price: usd(3999),
            category: Category::Accessories,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Ultra-soft merino wool beanie providing superior warmth without bulk. \
                 A winter essential with a clean, modern design."
                    .to_string(),
            ),
            colors: Some(strings(&["Gray", "Black", "Navy", "Burgundy"])),
            sizes: None,
            in_stock: Some(true),
            on_sale: Some(true),
            rating: Some(4.8),
        },
        Product {
            id: ProductId::new(7),
            name: "Minimalist Denim Jacket".to_string(),
            price: usd(14999),
            category: Category::Hoodies,
            image: "/placeholder.png".to_string(),
            is_new: true,
            description: Some(
                "Contemporary denim jacket with clean lines and minimal detailing. \
                 Versatile layering piece for year-round style."
                    .to_string(),
            ),
            colors: Some(strings(&["Blue", "Black", "Gray"])),
            sizes: Some(strings(&["S", "M", "L", "XL"])),
            in_stock: Some(false),
            on_sale: None,
            rating: Some(4.5),
        },
        Product {
            id: ProductId::new(8),
            name: "Relaxed Fit Chinos".to_string(),
            price: usd(8999),
            category: Category::Pants,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Comfortable relaxed fit chinos made from soft, durable cotton twill. \
                 Perfect for both work and weekend wear."
                    .to_string(),
            ),
            colors: Some(strings(&["Khaki", "Navy", "Olive", "Black"])),
            sizes: Some(strings(&["30", "32", "34", "36", "38"])),
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.6),
        },
        Product {
            id: ProductId::new(9),
            name: "Oxford Button-Down Shirt".to_string(),
            price: usd(9599),
            category: Category::Shirts,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Classic Oxford button-down shirt made from premium cotton. A timeless \
                 essential for any well-rounded wardrobe."
                    .to_string(),
            ),
            colors: Some(strings(&["White", "Blue", "Pink"])),
            sizes: Some(strings(&["S", "M", "L", "XL"])),
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.7),
        },
        Product {
            id: ProductId::new(10),
            name: "Leather Belt".to_string(),
            price: usd(6999),
            category: Category::Accessories,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Full-grain leather belt with subtle brass buckle. Handcrafted for \
                 durability and refined style."
                    .to_string(),
            ),
            colors: Some(strings(&["Brown", "Black"])),
            sizes: Some(strings(&["32", "34", "36", "38", "40"])),
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.9),
        },
        Product {
            id: ProductId::new(11),
            name: "Cashmere Crewneck Sweater".to_string(),
            price: usd(17999),
            category: Category::Hoodies,
            image: "/placeholder.png".to_string(),
            is_new: true,
            description: Some(
                "Luxurious cashmere sweater with a classic crewneck design. Exceptionally \
                 soft and warm for everyday elegance."
                    .to_string(),
            ),
            colors: Some(strings(&["Gray", "Navy", "Burgundy", "Camel"])),
            sizes: Some(strings(&["S", "M", "L", "XL"])),
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.8),
        },
        Product {
            id: ProductId::new(12),
            name: "Selvedge Denim Jeans".to_string(),
            price: usd(13999),
            category: Category::Pants,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Premium selvedge denim jeans with a slim-straight fit. Crafted for \
                 outstanding durability and personalized wear patterns."
                    .to_string(),
            ),
            colors: Some(strings(&["Indigo", "Black"])),
            sizes: Some(strings(&["29", "30", "31", "32", "33", "34", "36"])),
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.9),
        },
        Product {
            id: ProductId::new(13),
            name: "Silk Pocket Square".to_string(),
            price: usd(3499),
            category: Category::Accessories,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Hand-rolled silk pocket square with refined pattern. The perfect \
                 finishing touch for formal and business attire."
                    .to_string(),
            ),
            colors: Some(strings(&["Navy/Red", "Black/White", "Burgundy/Blue"])),
            sizes: None,
            in_stock: Some(true),
            on_sale: Some(true),
            rating: Some(4.5),
        },
        Product {
            id: ProductId::new(14),
            name: "Lightweight Linen Blazer".to_string(),
            price: usd(19999),
            category: Category::Shirts,
            image: "/placeholder.png".to_string(),
            is_new: true,
            description: Some(
                "Unstructured linen blazer perfect for warm-weather occasions. \
                 Breathable fabric with a natural texture."
                    .to_string(),
            ),
            colors: Some(strings(&["Beige", "Navy", "Olive"])),
            sizes: Some(strings(&["38", "40", "42", "44", "46"])),
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.7),
        },
        Product {
            id: ProductId::new(15),
            name: "Merino Wool Scarf".to_string(),
            price: usd(5999),
            category: Category::Accessories,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Soft merino wool scarf providing luxurious warmth. A versatile \
                 accessory for colder months."
                    .to_string(),
            ),
            colors: Some(strings(&["Gray", "Navy", "Burgundy", "Black"])),
            sizes: None,
            in_stock: Some(true),
            on_sale: None,
            rating: Some(4.8),
        },
        Product {
            id: ProductId::new(16),
            name: "Logo Embroidered Sweatshirt".to_string(),
            price: usd(11999),
            category: Category::Hoodies,
            image: "/placeholder.png".to_string(),
            is_new: false,
            description: Some(
                "Premium cotton sweatshirt with subtle logo embroidery. Comfortable fit \
                 with ribbed cuffs and hem."
                    .to_string(),
            ),
            colors: Some(strings(&["Gray", "Black", "Navy"])),
            sizes: Some(strings(&["XS", "S", "M", "L", "XL"])),
            in_stock: Some(true),
            on_sale: Some(true),
            rating: Some(4.6),
        },
    ]
}
