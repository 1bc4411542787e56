//! Filter classification for smart queries.
//!
//! Each token becomes one of:
//! - a `key:value` filter (rarity, type/category, voi, sub/subcategory)
//! - an exact phrase, when the tokenizer saw quotes
//! - a free name term
//!
//! Unknown keys are dropped without contributing anything.

use serde::Serialize;

use super::tokenizer::Token;

/// Parsed filters for one smart query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilters {
    /// Free terms, OR-combined against name and subcategories
    pub name_terms: Vec<String>,
    /// Quoted phrases, OR-combined against name and subcategories
    pub exact_phrases: Vec<String>,
    /// Exact rarity (case-insensitive)
    pub rarity: Option<String>,
    /// Category substring
    pub category: Option<String>,
    /// Subcategory substring
    pub subcategory: Option<String>,
    /// Notable flag, unset unless `voi:` appeared
    pub notable: Option<bool>,
}

/// Recognised filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Rarity,
    Category,
    Notable,
    Subcategory,
}

impl FilterKey {
    /// Map a lower-cased key to a filter, `None` for unknown keys.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "rarity" => Some(Self::Rarity),
            "type" | "category" => Some(Self::Category),
            "voi" => Some(Self::Notable),
            "sub" | "subcategory" => Some(Self::Subcategory),
            _ => None,
        }
    }
}

impl SearchFilters {
    /// Create new empty filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify tokens into filters. Later keys overwrite earlier ones.
    #[must_use]
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut filters = Self::new();
        for token in tokens {
            filters.classify(token);
        }
        filters
    }

    /// Classify one token into these filters.
    pub fn classify(&mut self, token: &Token) {
        if let Some((key, value)) = token.text.split_once(':') {
            let key = key.trim().to_lowercase();
            let value = value.trim().to_lowercase();
            if let Some(key) = FilterKey::parse(&key) {
                self.set(key, value);
            }
        } else if token.quoted {
            self.exact_phrases.push(token.text.clone());
        } else {
            self.name_terms.push(token.text.clone());
        }
    }

    /// Apply a single filter value. An empty value clears string filters.
    pub fn set(&mut self, key: FilterKey, value: String) {
        let value = Some(value).filter(|v| !v.is_empty());
        match key {
            FilterKey::Rarity => self.rarity = value,
            FilterKey::Category => self.category = value,
            FilterKey::Subcategory => self.subcategory = value,
            FilterKey::Notable => {
                self.notable = Some(matches!(value.as_deref(), Some("yes" | "true" | "1")));
            }
        }
    }

    /// Builder: set rarity filter
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    /// Builder: set category filter
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check if any condition is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_terms.is_empty()
            && self.exact_phrases.is_empty()
            && self.rarity.is_none()
            && self.category.is_none()
            && self.subcategory.is_none()
            && self.notable.is_none()
    }
}
