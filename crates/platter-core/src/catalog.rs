//! # Catalog
//!
//! The read-only list of purchasable food items.
//!
//! The catalog keeps its source order; the food display renders items in
//! that order and nothing about the order implies a ranking. Lookups by id
//! go through an index built once at load time.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::types::FoodItem;
use crate::validation::validate_catalog;
use crate::ALL_CATEGORIES;

/// Catalog bundled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Immutable, insertion-ordered food catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from already-parsed items.
    ///
    /// ## Errors
    /// `CatalogError::InvalidItem` when an item has an empty id or name, a
    /// price outside `1..=MAX_PRICE`, or reuses an id.
    pub fn from_items(items: Vec<FoodItem>) -> Result<Self, CatalogError> {
        validate_catalog(&items)
            .map_err(|(index, source)| CatalogError::InvalidItem { index, source })?;

        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.clone(), i))
            .collect();

        Ok(Catalog { items, index })
    }

    /// Parses a catalog from a JSON array of food items.
    ///
    /// ```rust
    /// use platter_core::Catalog;
    ///
    /// let catalog = Catalog::load_json(r#"[{"_id":"1","name":"Soup","price":500}]"#).unwrap();
    /// assert_eq!(catalog.len(), 1);
    ///
    /// assert!(Catalog::load_json("not json").is_err());
    /// ```
    pub fn load_json(source: &str) -> Result<Self, CatalogError> {
        let items: Vec<FoodItem> = serde_json::from_str(source)?;
        let catalog = Self::from_items(items)?;
        tracing::debug!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The catalog that ships with the storefront.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::load_json(BUNDLED_CATALOG)
    }

    /// All items in source order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Whether an id names a catalog item.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in one menu category, in catalog order.
    ///
    /// [`ALL_CATEGORIES`] returns every item.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a FoodItem> + 'a {
        self.items
            .iter()
            .filter(move |item| category == ALL_CATEGORIES || item.category == category)
    }

    /// Distinct non-empty categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            let category = item.category.as_str();
            if !category.is_empty() && !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::money::Money;
    use crate::MAX_PRICE;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.items().iter().all(|item| item.price.is_positive()));
        assert_eq!(catalog.get("1").map(|i| i.name.as_str()), Some("Greek salad"));
    }

    #[test]
    fn test_preserves_source_order() {
        let catalog = Catalog::load_json(
            r#"[{"_id":"b","name":"B","price":1},{"_id":"a","name":"A","price":2},{"_id":"c","name":"C","price":3}]"#,
        )
        .unwrap();

        let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_malformed_source() {
        assert!(matches!(
            Catalog::load_json(r#"{"_id":"1"}"#),
            Err(CatalogError::Malformed(_))
        ));
        assert!(matches!(
            Catalog::load_json(r#"[{"_id":"1","name":"Soup","price":"cheap"}]"#),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn test_invalid_items_rejected() {
        let err = Catalog::load_json(r#"[{"_id":"1","name":"Soup","price":0}]"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidItem {
                index: 0,
                source: ValidationError::MustBePositive { .. }
            }
        ));

        let err = Catalog::from_items(vec![
            FoodItem::new("1", "Soup", Money::from_cents(500)),
            FoodItem::new("1", "Stew", Money::from_cents(900)),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidItem { index: 1, .. }));
    }

    #[test]
    fn test_price_ceiling_enforced_at_load() {
        let source = format!(r#"[{{"_id":"1","name":"Caviar","price":{}}}]"#, MAX_PRICE.cents());
        let catalog = Catalog::load_json(&source).unwrap();
        assert_eq!(catalog.get("1").map(|i| i.price), Some(MAX_PRICE));

        let source = format!(r#"[{{"_id":"1","name":"Caviar","price":{}}}]"#, MAX_PRICE.cents() + 1);
        assert!(matches!(
            Catalog::load_json(&source),
            Err(CatalogError::InvalidItem {
                index: 0,
                source: ValidationError::OutOfRange { .. }
            })
        ));

        assert!(matches!(
            Catalog::load_json(r#"[{"_id":"1","name":"Caviar","price":5000000000000000000}]"#),
            Err(CatalogError::InvalidItem { index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::load_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get("1").is_none());
    }

    #[test]
    fn test_categories_and_filter() {
        let catalog = Catalog::from_items(vec![
            FoodItem::new("1", "Greek salad", Money::from_cents(1200)).with_category("Salad"),
            FoodItem::new("2", "Veg Rolls", Money::from_cents(1500)).with_category("Rolls"),
            FoodItem::new("3", "Veg salad", Money::from_cents(1800)).with_category("Salad"),
            FoodItem::new("4", "Mystery", Money::from_cents(100)),
        ])
        .unwrap();

        assert_eq!(catalog.categories(), vec!["Salad", "Rolls"]);

        let salads: Vec<&str> = catalog.by_category("Salad").map(|i| i.id.as_str()).collect();
        assert_eq!(salads, vec!["1", "3"]);

        assert_eq!(catalog.by_category(ALL_CATEGORIES).count(), 4);
        assert_eq!(catalog.by_category("Cake").count(), 0);
    }
}
