//! Menu Catalog Module
//!
//! This module contains the read-only menu the cart manager draws from:
//! - Catalog models (MenuItem, CategoryFilter)
//! - The built-in cafeteria menu
//! - Venue information shown alongside the menu
//! - REST handlers for browsing categories and venue info

pub mod data;
pub mod handlers;
pub mod info;
pub mod models;

use crate::error::StorefrontError;
use std::{collections::HashSet, path::Path};

pub use handlers::routes;
pub use models::{CategoryFilter, MenuItem, ALL_CATEGORIES};

/// Immutable, ordered list of menu items
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty menus and duplicate ids
    pub fn new(items: Vec<MenuItem>) -> Result<Self, StorefrontError> {
        if items.is_empty() {
            return Err(StorefrontError::InvalidCatalog("menu has no items".into()));
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(StorefrontError::InvalidCatalog(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
        }

        Ok(Self { items })
    }

    /// The cafeteria's default menu
    pub fn builtin() -> Self {
        Self {
            items: data::builtin_menu(),
        }
    }

    /// Loads a JSON array of menu items from `path`
    pub fn from_json_file(path: &Path) -> Result<Self, StorefrontError> {
        let raw = std::fs::read_to_string(path)?;
        let items: Vec<MenuItem> = serde_json::from_str(&raw)?;
        tracing::info!("Loaded {} menu items from {:?}", items.len(), path);
        Self::new(items)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.items.iter().any(|i| i.category == category)
    }

    /// Items visible under `category`, catalog order preserved.
    ///
    /// `"all"` returns the whole catalog; anything else is matched by exact
    /// string equality, so an unknown category yields an empty list.
    pub fn filter_by_category(&self, category: &str) -> Vec<&MenuItem> {
        self.filter(&CategoryFilter::parse(category))
    }

    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| filter.matches(i)).collect()
    }

    /// Resolves a raw category argument against this catalog
    pub fn resolve_filter(&self, raw: &str) -> Result<CategoryFilter, StorefrontError> {
        match CategoryFilter::parse(raw) {
            CategoryFilter::Category(name) if !self.has_category(&name) => {
                Err(StorefrontError::UnknownCategory(name))
            }
            filter => Ok(filter),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_menu_passes_validation() {
        let items = Catalog::builtin().items().to_vec();
        assert_eq!(items.len(), 15);
        assert!(Catalog::new(items).is_ok());
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec!["Первые блюда", "Вторые блюда", "Салаты", "Напитки", "Выпечка"]
        );
    }

    #[test]
    fn filter_all_returns_everything_in_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<u32> = catalog.filter_by_category("all").iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn filter_by_category_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        let drinks: Vec<u32> = catalog
            .filter_by_category("Напитки")
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(drinks, vec![10, 11, 12]);
    }

    #[test]
    fn filter_is_exact_match() {
        let catalog = Catalog::builtin();
        assert!(catalog.filter_by_category("напитки").is_empty());
        assert!(catalog.filter_by_category("Десерты").is_empty());
    }

    #[test]
    fn resolve_filter_rejects_unknown_category() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.resolve_filter("all").unwrap(), CategoryFilter::All);
        assert!(matches!(
            catalog.resolve_filter("Десерты"),
            Err(StorefrontError::UnknownCategory(name)) if name == "Десерты"
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut items = Catalog::builtin().items().to_vec();
        items.push(items[0].clone());
        assert!(matches!(
            Catalog::new(items),
            Err(StorefrontError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn rejects_empty_menu() {
        assert!(Catalog::new(Vec::new()).is_err());
    }

    #[test]
    fn loads_menu_from_json_file() {
        let path = std::env::temp_dir().join(format!("menu-{}.json", uuid::Uuid::new_v4()));
        let builtin = Catalog::builtin();
        std::fs::write(&path, serde_json::to_string(&builtin.items()[..3]).unwrap()).unwrap();

        let catalog = Catalog::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.items().len(), 3);
        assert_eq!(catalog.get(2).unwrap().name, "Щи кислые");
        assert_eq!(catalog.categories(), vec!["Первые блюда"]);
    }
}
