//! Presentation of search results: titles, notices, pages and highlights.
//!
//! Nothing here knows about a terminal or a chat platform. The CLI
//! formatters and the bot both render from [`SearchOutcome`] and
//! [`NotableListing`].

use itertools::Itertools;
use serde::Serialize;

use super::filters::SearchFilters;
use super::mode::QueryMode;
use super::predicate::{Predicate, TAG_FIELDS};
use crate::catalog::Item;

/// Characters kept free for the ` (Page n)` suffix on paged titles.
pub const PAGE_SUFFIX_RESERVE: usize = 16;

/// Result of one search: the parsed query plus the matching rows.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    #[serde(flatten)]
    pub mode: QueryMode,
    pub total: usize,
    pub items: Vec<Item>,
}

/// One page of a paged result.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    /// Page number starting at 1
    pub number: usize,
    pub title: String,
    pub items: &'a [Item],
}

impl SearchOutcome {
    #[must_use]
    pub fn new(query: impl Into<String>, mode: QueryMode, items: Vec<Item>) -> Self {
        Self {
            query: query.into(),
            total: items.len(),
            mode,
            items,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Full title, before any length cap.
    #[must_use]
    pub fn title(&self) -> String {
        match &self.mode {
            QueryMode::Smart { filters } => {
                let parts = describe_filters(filters, "sub");
                if parts.is_empty() {
                    "Smart Search Results".to_string()
                } else {
                    format!("Items with: {}", parts.join(", "))
                }
            }
            QueryMode::And { tags } => format!("Items with ALL tags: {}", ticked(tags)),
            QueryMode::Or { tags } => format!("Items with ANY tag: {}", ticked(tags)),
            QueryMode::Single { term } => format!("Items matching: `{term}`"),
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        format!("Found {} item(s)", self.total)
    }

    /// Notice shown when nothing matched, naming what was searched.
    #[must_use]
    pub fn no_results_message(&self) -> String {
        match &self.mode {
            QueryMode::And { tags } => format!("No items found matching ALL tags: {}", ticked(tags)),
            QueryMode::Or { tags } => format!("No items found matching ANY tag: {}", ticked(tags)),
            QueryMode::Smart { filters } => format!(
                "No items found with filters: {}",
                describe_filters(filters, "subcategory").join(", ")
            ),
            QueryMode::Single { .. } => format!("No items found for: `{}`", self.query),
        }
    }

    /// Field filters of a smart query as `(label, value)` pairs.
    #[must_use]
    pub fn active_filters(&self) -> Vec<(&'static str, String)> {
        let Some(filters) = self.mode.filters() else {
            return Vec::new();
        };
        let mut active = Vec::new();
        if let Some(ref rarity) = filters.rarity {
            active.push(("Rarity", rarity.clone()));
        }
        if let Some(ref category) = filters.category {
            active.push(("Type", category.clone()));
        }
        if let Some(notable) = filters.notable {
            active.push(("VOI", yes_no(notable).to_string()));
        }
        if let Some(ref subcategory) = filters.subcategory {
            active.push(("Subcategory", subcategory.clone()));
        }
        active
    }

    /// Tags that match `item`. Always empty in smart mode.
    #[must_use]
    pub fn matched_terms(&self, item: &Item) -> Vec<&str> {
        if self.mode.is_smart() {
            return Vec::new();
        }
        self.mode
            .tags()
            .iter()
            .filter(|tag| Predicate::any_field(tag, &TAG_FIELDS).matches(item))
            .map(String::as_str)
            .collect()
    }

    /// Split results into pages of `page_size`.
    ///
    /// Results that fit on one page keep the plain title; otherwise every
    /// page title is shortened to leave room for ` (Page n)`.
    #[must_use]
    pub fn pages(&self, page_size: usize, title_max_chars: usize) -> Vec<Page<'_>> {
        let title = self.title();
        let page_size = page_size.max(1);

        if self.items.len() <= page_size {
            return vec![Page {
                number: 1,
                title: truncate_chars(&title, title_max_chars),
                items: &self.items,
            }];
        }

        let base = truncate_chars(&title, title_max_chars.saturating_sub(PAGE_SUFFIX_RESERVE));
        self.items
            .chunks(page_size)
            .enumerate()
            .map(|(idx, items)| Page {
                number: idx + 1,
                title: format!("{base} (Page {})", idx + 1),
                items,
            })
            .collect()
    }
}

/// Notable items listing, truncated for display but keeping the true total.
#[derive(Debug, Clone, Serialize)]
pub struct NotableListing {
    pub total: usize,
    pub items: Vec<Item>,
}

impl NotableListing {
    /// Keep the first `limit` of `items`.
    #[must_use]
    pub fn new(mut items: Vec<Item>, limit: usize) -> Self {
        let total = items.len();
        items.truncate(limit);
        Self { total, items }
    }

    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.total > self.items.len()
    }

    #[must_use]
    pub fn description(&self) -> String {
        format!("Found {} VOI item(s)", self.total)
    }

    /// `Showing 20 of N VOI items` when truncated.
    #[must_use]
    pub fn footer(&self) -> Option<String> {
        self.is_truncated()
            .then(|| format!("Showing {} of {} VOI items", self.items.len(), self.total))
    }
}

fn describe_filters(filters: &SearchFilters, sub_label: &str) -> Vec<String> {
    let mut parts = Vec::new();
    if !filters.name_terms.is_empty() {
        parts.push(format!("terms: {}", ticked(&filters.name_terms)));
    }
    if !filters.exact_phrases.is_empty() {
        parts.push(format!("phrases: {}", ticked(&filters.exact_phrases)));
    }
    if let Some(ref rarity) = filters.rarity {
        parts.push(format!("rarity: `{rarity}`"));
    }
    if let Some(ref category) = filters.category {
        parts.push(format!("type: `{category}`"));
    }
    if let Some(notable) = filters.notable {
        parts.push(format!("VOI: `{}`", yes_no(notable)));
    }
    if let Some(ref subcategory) = filters.subcategory {
        parts.push(format!("{sub_label}: `{subcategory}`"));
    }
    parts
}

fn ticked(values: &[String]) -> String {
    values.iter().map(|v| format!("`{v}`")).join(", ")
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Truncate to at most `max` characters without splitting a code point.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
