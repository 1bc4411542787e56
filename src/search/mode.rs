//! Query mode selection.
//!
//! The raw query picks exactly one mode, checked in priority order:
//!
//! 1. `Smart` when any chunk has a `key:value` filter or a quoted phrase
//! 2. `And` when the query contains `+`
//! 3. `Or` when it contains `,` or `/`
//! 4. `Or` when it contains whitespace
//! 5. `Single` otherwise
//!
//! A delimiter that leaves no non-empty parts (`++`, `,/`) falls back to
//! `Single` over the whole string.

use serde::Serialize;
use tracing::debug;

use super::filters::SearchFilters;
use super::tokenizer::tokenize;

/// How a query is matched against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QueryMode {
    /// The whole query is one substring term.
    Single { term: String },
    /// Every tag must match.
    And { tags: Vec<String> },
    /// Any tag may match.
    Or { tags: Vec<String> },
    /// Terms, phrases and field filters.
    Smart { filters: SearchFilters },
}

impl QueryMode {
    /// Choose the mode for a raw query. Surrounding whitespace is ignored.
    #[must_use]
    pub fn select(query: &str) -> Self {
        let query = query.trim();
        let mode = Self::select_trimmed(query);
        debug!(query, mode = mode.label(), "selected query mode");
        mode
    }

    fn select_trimmed(query: &str) -> Self {
        let tokens = tokenize(query);
        let has_filter = query.split_whitespace().any(|chunk| chunk.contains(':'));
        if has_filter || tokens.iter().any(|t| t.quoted) {
            return Self::Smart {
                filters: SearchFilters::from_tokens(&tokens),
            };
        }

        let delimited = if query.contains('+') {
            Some(Self::And {
                tags: split_tags(query.split('+')),
            })
        } else if query.contains([',', '/']) {
            Some(Self::Or {
                tags: split_tags(query.replace('/', ",").split(',')),
            })
        } else if query.contains(char::is_whitespace) {
            Some(Self::Or {
                tags: split_tags(query.split_whitespace()),
            })
        } else {
            None
        };

        match delimited {
            Some(mode) if !mode.tags().is_empty() => mode,
            _ => Self::Single {
                term: query.to_string(),
            },
        }
    }

    /// Tags shown to the user and used for match highlighting.
    ///
    /// Smart queries report their terms through [`SearchFilters`] instead.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Single { term } => std::slice::from_ref(term),
            Self::And { tags } | Self::Or { tags } => tags,
            Self::Smart { .. } => &[],
        }
    }

    /// Parsed filters, only present in smart mode.
    #[must_use]
    pub const fn filters(&self) -> Option<&SearchFilters> {
        match self {
            Self::Smart { filters } => Some(filters),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Single { .. } => "single",
            Self::And { .. } => "and",
            Self::Or { .. } => "or",
            Self::Smart { .. } => "smart",
        }
    }

    #[must_use]
    pub const fn is_smart(&self) -> bool {
        matches!(self, Self::Smart { .. })
    }
}

fn split_tags<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
