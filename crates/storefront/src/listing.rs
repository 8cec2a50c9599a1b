//! The listing filter/sort pipeline.
//!
//! A pure transformation from (catalog, query) to the ordered product
//! subset a category page renders. No state, no I/O; an empty result is a
//! valid outcome, not an error.

use rust_decimal::Decimal;

use crate::catalog::Product;

/// Reserved slug meaning "no category filter": every product matches.
pub const FEATURED_SLUG: &str = "featured";

/// Sort order for listing results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recently added first. The catalog carries no timestamps, so a
    /// higher product id is the defined proxy for recency.
    #[default]
    Newest,
    PriceLowHigh,
    PriceHighLow,
}

impl SortOrder {
    /// Parse from URL parameter value. Unknown values fall back to newest.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low-high" => Self::PriceLowHigh,
            "price-high-low" => Self::PriceHighLow,
            _ => Self::Newest,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLowHigh => "price-low-high",
            Self::PriceHighLow => "price-high-low",
        }
    }
}

/// Inclusive price bounds in the currency's standard unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Create a range from inclusive bounds.
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Whether `amount` lies within the bounds, inclusive on both ends.
    #[must_use]
    pub fn contains(&self, amount: Decimal) -> bool {
        self.min <= amount && amount <= self.max
    }
}

impl Default for PriceRange {
    /// The category page's default slider span, $0-$200.
    fn default() -> Self {
        Self::new(Decimal::ZERO, Decimal::from(200))
    }
}

/// Filter criteria for a category listing.
///
/// Category and price range are applied; the remaining criteria are
/// accepted for interface compatibility with the filter drawer but are
/// reserved: they never change the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    /// Lowercase category slug; [`FEATURED_SLUG`] selects every product and
    /// an unknown slug matches nothing.
    pub category: String,
    pub price_range: PriceRange,
    pub sort: SortOrder,
    /// Reserved; accepted but never applied.
    pub colors: Vec<String>,
    /// Reserved; accepted but never applied.
    pub sizes: Vec<String>,
    /// Reserved; accepted but never applied.
    pub on_sale_only: bool,
    /// Reserved; accepted but never applied.
    pub in_stock_only: bool,
}

impl ListingQuery {
    /// A query for one category slug with default range and sort.
    #[must_use]
    pub fn for_category(slug: &str) -> Self {
        Self {
            category: slug.to_string(),
            price_range: PriceRange::default(),
            sort: SortOrder::default(),
            colors: Vec::new(),
            sizes: Vec::new(),
            on_sale_only: false,
            in_stock_only: false,
        }
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::for_category(FEATURED_SLUG)
    }
}

/// Produce the ordered product subset a listing view should render.
///
/// Filters by category slug (with the `featured` bypass) and inclusive
/// price range, then stable-sorts by the requested order so that ties keep
/// the catalog's relative order.
#[must_use]
pub fn products_for_listing(products: &[Product], query: &ListingQuery) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| query.category == FEATURED_SLUG || p.category.as_str() == query.category)
        .filter(|p| query.price_range.contains(p.price.amount))
        .cloned()
        .collect();

    match query.sort {
        SortOrder::Newest => result.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::PriceLowHigh => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceHighLow => result.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    result
}
