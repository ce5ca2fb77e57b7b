//! Menu Catalog Models
//!
//! Read-only records supplied by the catalog and the category filter used
//! to browse them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire sentinel selecting the whole menu
pub const ALL_CATEGORIES: &str = "all";

/// A purchasable menu entry. Never mutated after the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Unique identifier, stable for the catalog's lifetime
    pub id: u32,

    /// Display name
    pub name: String,

    /// Category the item is listed under
    pub category: String,

    /// Price in whole currency units
    pub price: u32,

    /// Portion size label, e.g. "300г" or "250мл"
    pub weight: String,

    /// Short display description
    pub description: String,
}

/// Category selection: the whole menu or one exact category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parses a raw category argument. Only the literal `"all"` maps to
    /// [`CategoryFilter::All`]; no case normalization is applied.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(name) => name,
        }
    }

    /// Whether `item` is visible under this filter
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => item.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
