//! In-memory catalog.
//!
//! Evaluates predicates with [`Predicate::matches`] and sorts with
//! [`catalog_order`], giving the same answers as the SQLite catalog without
//! touching disk.

use rand::seq::IndexedRandom;

use crate::catalog::{Catalog, Item, catalog_order};
use crate::error::Result;
use crate::search::Predicate;

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    items: Vec<Item>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows. Later rows with an existing name are ignored, the
    /// same way the SQLite import treats duplicates.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item);
        }
        catalog
    }

    /// Insert a row, returning false when the name already exists.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.items.iter().any(|existing| existing.name == item.name) {
            return false;
        }
        self.items.push(item);
        true
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    fn sorted(&self, predicate: &Predicate) -> Vec<Item> {
        let mut matched: Vec<Item> = self
            .items
            .iter()
            .filter(|item| predicate.matches(item))
            .cloned()
            .collect();
        matched.sort_by(catalog_order);
        matched
    }
}

impl Catalog for MemoryCatalog {
    fn find(&self, predicate: &Predicate, limit: usize) -> Result<Vec<Item>> {
        let mut items = self.sorted(predicate);
        items.truncate(limit);
        Ok(items)
    }

    fn random(&self) -> Result<Option<Item>> {
        Ok(self.items.choose(&mut rand::rng()).cloned())
    }

    fn notable(&self) -> Result<Vec<Item>> {
        Ok(self.sorted(&Predicate::Notable(true)))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.items.len())
    }
}
