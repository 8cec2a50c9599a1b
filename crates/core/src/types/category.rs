//! Product category tags.

use serde::{Deserialize, Serialize};

/// A product category, addressed by its lowercase slug.
///
/// The catalog uses a fixed small set of categories. The reserved slug
/// `featured` is not a category: listing code treats it as "no category
/// filter", so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shirts,
    Pants,
    Hoodies,
    Accessories,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Self; 4] = [Self::Shirts, Self::Pants, Self::Hoodies, Self::Accessories];

    /// The lowercase slug used for addressing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shirts => "shirts",
            Self::Pants => "pants",
            Self::Hoodies => "hoodies",
            Self::Accessories => "accessories",
        }
    }

    /// Parse a slug back into a category.
    #[must_use]
    pub fn parse(slug: &str) -> Option<Self> {
        match slug {
            "shirts" => Some(Self::Shirts),
            "pants" => Some(Self::Pants),
            "hoodies" => Some(Self::Hoodies),
            "accessories" => Some(Self::Accessories),
            _ => None,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_reserved_slugs() {
        assert_eq!(Category::parse("jackets"), None);
        // "featured" is a listing keyword, not a category.
        assert_eq!(Category::parse("featured"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_slug() {
        let json = serde_json::to_string(&Category::Hoodies).expect("serialize");
        assert_eq!(json, "\"hoodies\"");
        let back: Category = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Category::Hoodies);
    }
}
