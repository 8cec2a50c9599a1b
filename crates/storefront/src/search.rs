//! Substring search over the catalog.
//!
//! Backs the search overlay: a case-insensitive substring match against
//! product name, category slug, and description. A blank query produces no
//! results rather than the whole catalog.

use crate::catalog::Product;

/// Results for one search query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    /// The normalized (trimmed, lowercased) query that was matched.
    pub query: String,
    pub products: Vec<Product>,
}

impl SearchResults {
    /// Whether the query matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of matching products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// Search the catalog for products matching `query`.
///
/// Matches are returned in catalog order.
#[must_use]
pub fn search_catalog(products: &[Product], query: &str) -> SearchResults {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return SearchResults {
            query: normalized,
            products: Vec::new(),
        };
    }

    let matches = products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&normalized)
                || p.category.as_str().contains(&normalized)
                || p.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&normalized))
        })
        .cloned()
        .collect();

    SearchResults {
        query: normalized,
        products: matches,
    }
}

#[cfg(test)]
mod tests {
    use atelier_core::{Category, ProductId};

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_blank_query_matches_nothing() {
        let catalog = Catalog::demo();
        assert!(search_catalog(catalog.products(), "").is_empty());
        assert!(search_catalog(catalog.products(), "   ").is_empty());
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let catalog = Catalog::demo();
        let results = search_catalog(catalog.products(), "CASHMERE");
        assert!(
            results
                .products
                .iter()
                .any(|p| p.id == ProductId::new(3))
        );
        assert!(
            results
                .products
                .iter()
                .any(|p| p.id == ProductId::new(11))
        );
    }

    #[test]
    fn test_matches_category_slug() {
        let catalog = Catalog::demo();
        let results = search_catalog(catalog.products(), "pants");
        assert!(!results.is_empty());
        assert!(
            results
                .products
                .iter()
                .all(|p| p.category == Category::Pants)
        );
    }

    #[test]
    fn test_matches_description() {
        let catalog = Catalog::demo();
        // "patina" appears only in the card holder description.
        let results = search_catalog(catalog.products(), "patina");
        assert_eq!(results.len(), 1);
        let only = results.products.first().expect("one match");
        assert_eq!(only.id, ProductId::new(4));
    }

    #[test]
    fn test_no_match_is_valid_empty_result() {
        let catalog = Catalog::demo();
        let results = search_catalog(catalog.products(), "umbrella");
        assert!(results.is_empty());
        assert_eq!(results.query, "umbrella");
    }

    #[test]
    fn test_query_is_normalized() {
        let catalog = Catalog::demo();
        let results = search_catalog(catalog.products(), "  Linen ");
        assert_eq!(results.query, "linen");
        assert!(
            results
                .products
                .iter()
                .any(|p| p.id == ProductId::new(5))
        );
    }
}
