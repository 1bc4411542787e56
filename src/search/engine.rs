//! End-to-end query execution against any [`Catalog`].

use tracing::debug;

use super::mode::QueryMode;
use super::predicate::Predicate;
use super::report::{NotableListing, SearchOutcome};
use crate::catalog::{Catalog, Item};
use crate::config::Config;
use crate::error::{IlError, Result};

/// Limits applied to every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub max_results: usize,
    pub min_query_chars: usize,
    pub notable_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: 30,
            min_query_chars: 2,
            notable_limit: 20,
        }
    }
}

impl From<&Config> for SearchOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_results: config.search.max_results,
            min_query_chars: config.search.min_query_chars,
            notable_limit: config.display.notable_limit,
        }
    }
}

/// Stateless query runner borrowing a catalog handle.
pub struct SearchEngine<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    options: SearchOptions,
}

impl<'a, C: Catalog + ?Sized> SearchEngine<'a, C> {
    pub const fn new(catalog: &'a C, options: SearchOptions) -> Self {
        Self { catalog, options }
    }

    /// Trim `query` and reject it when it is shorter than the minimum.
    pub fn validate<'q>(&self, query: &'q str) -> Result<&'q str> {
        let trimmed = query.trim();
        if trimmed.chars().count() < self.options.min_query_chars {
            return Err(IlError::QueryTooShort {
                min_chars: self.options.min_query_chars,
            });
        }
        Ok(trimmed)
    }

    /// Run a free-form query.
    ///
    /// An empty result is a normal outcome; only catalog failures and
    /// too-short input are errors.
    pub fn search(&self, query: &str) -> Result<SearchOutcome> {
        let query = self.validate(query)?;
        let mode = QueryMode::select(query);
        let predicate = Predicate::for_mode(&mode);
        let items = self.catalog.find(&predicate, self.options.max_results)?;
        debug!(
            query,
            mode = mode.label(),
            results = items.len(),
            "search complete"
        );
        Ok(SearchOutcome::new(query, mode, items))
    }

    /// One uniformly random item.
    pub fn random(&self) -> Result<Option<Item>> {
        self.catalog.random()
    }

    /// All notable items, truncated for display.
    pub fn notable(&self) -> Result<NotableListing> {
        let items = self.catalog.notable()?;
        Ok(NotableListing::new(items, self.options.notable_limit))
    }
}
