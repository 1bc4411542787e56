//! Predicate tree shared by every query mode.
//!
//! A [`Predicate`] renders to a parameterised SQL `WHERE` clause for the
//! SQLite catalog and evaluates directly against an [`Item`] for the
//! in-memory one. Both sides fold ASCII case only, the same way SQLite's
//! `LIKE` does, so the two backends agree row for row.

use rusqlite::types::Value;

use super::filters::SearchFilters;
use super::mode::QueryMode;
use crate::catalog::{Item, trimmed_sql};

/// Searchable item columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Subcategories,
    Rarity,
}

impl Field {
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Subcategories => "subcategories",
            Self::Rarity => "rarity",
        }
    }

    fn value(self, item: &Item) -> &str {
        match self {
            Self::Name => &item.name,
            Self::Category => &item.category,
            Self::Subcategories => &item.subcategories,
            Self::Rarity => item.rarity.as_str(),
        }
    }
}

/// Fields a plain (non-smart) tag is matched against.
pub const TAG_FIELDS: [Field; 3] = [Field::Name, Field::Subcategories, Field::Category];

/// Fields smart-mode terms and phrases are matched against.
pub const TERM_FIELDS: [Field; 2] = [Field::Name, Field::Subcategories];

/// Boolean condition over catalog rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every row.
    All,
    /// Case-insensitive literal substring test.
    Contains { field: Field, needle: String },
    /// Case-insensitive equality after trimming ASCII whitespace.
    Equals { field: Field, value: String },
    /// Notable flag equality.
    Notable(bool),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn contains(field: Field, needle: impl Into<String>) -> Self {
        Self::Contains {
            field,
            needle: needle.into(),
        }
    }

    pub fn equals(field: Field, value: impl Into<String>) -> Self {
        Self::Equals {
            field,
            value: value.into(),
        }
    }

    /// `needle` as a substring of any of `fields`.
    #[must_use]
    pub fn any_field(needle: &str, fields: &[Field]) -> Self {
        Self::Or(
            fields
                .iter()
                .map(|&field| Self::contains(field, needle))
                .collect(),
        )
    }

    /// Build the predicate for a selected query mode.
    #[must_use]
    pub fn for_mode(mode: &QueryMode) -> Self {
        match mode {
            QueryMode::Single { term } => Self::any_field(term, &TAG_FIELDS),
            QueryMode::And { tags } => Self::And(
                tags.iter()
                    .map(|tag| Self::any_field(tag, &TAG_FIELDS))
                    .collect(),
            ),
            QueryMode::Or { tags } => Self::Or(
                tags.iter()
                    .map(|tag| Self::any_field(tag, &TAG_FIELDS))
                    .collect(),
            ),
            QueryMode::Smart { filters } => Self::from_filters(filters),
        }
    }

    /// AND between condition groups, OR within the term and phrase groups.
    ///
    /// Filters with no conditions produce [`Predicate::All`].
    #[must_use]
    pub fn from_filters(filters: &SearchFilters) -> Self {
        let mut conditions = Vec::new();

        if !filters.name_terms.is_empty() {
            conditions.push(Self::Or(
                filters
                    .name_terms
                    .iter()
                    .map(|term| Self::any_field(term, &TERM_FIELDS))
                    .collect(),
            ));
        }
        if !filters.exact_phrases.is_empty() {
            conditions.push(Self::Or(
                filters
                    .exact_phrases
                    .iter()
                    .map(|phrase| Self::any_field(phrase, &TERM_FIELDS))
                    .collect(),
            ));
        }
        if let Some(ref rarity) = filters.rarity {
            conditions.push(Self::equals(Field::Rarity, rarity));
        }
        if let Some(ref category) = filters.category {
            conditions.push(Self::contains(Field::Category, category));
        }
        if let Some(notable) = filters.notable {
            conditions.push(Self::Notable(notable));
        }
        if let Some(ref subcategory) = filters.subcategory {
            conditions.push(Self::contains(Field::Subcategories, subcategory));
        }

        match conditions.len() {
            0 => Self::All,
            1 => conditions.remove(0),
            _ => Self::And(conditions),
        }
    }

    /// Evaluate against a single item.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Contains { field, needle } => field
                .value(item)
                .to_ascii_lowercase()
                .contains(&needle.to_ascii_lowercase()),
            Self::Equals { field, value } => field
                .value(item)
                .trim_ascii()
                .eq_ignore_ascii_case(value.trim_ascii()),
            Self::Notable(flag) => item.is_notable == *flag,
            Self::And(parts) => parts.iter().all(|p| p.matches(item)),
            Self::Or(parts) => parts.iter().any(|p| p.matches(item)),
        }
    }

    /// Render as a SQL boolean expression with positional parameters.
    #[must_use]
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut params = Vec::new();
        let sql = self.write_sql(&mut params);
        (sql, params)
    }

    fn write_sql(&self, params: &mut Vec<Value>) -> String {
        match self {
            Self::All => "1 = 1".to_string(),
            Self::Contains { field, needle } => {
                params.push(Value::Text(like_pattern(needle)));
                format!("{} LIKE ? ESCAPE '\\'", field.column())
            }
            Self::Equals { field, value } => {
                params.push(Value::Text(value.trim_ascii().to_ascii_lowercase()));
                format!("LOWER({}) = ?", trimmed_sql(field.column()))
            }
            Self::Notable(true) => "COALESCE(voi, 0) != 0".to_string(),
            Self::Notable(false) => "COALESCE(voi, 0) = 0".to_string(),
            Self::And(parts) => join_sql(parts, " AND ", "1 = 1", params),
            Self::Or(parts) => join_sql(parts, " OR ", "1 = 0", params),
        }
    }
}

fn join_sql(parts: &[Predicate], sep: &str, empty: &str, params: &mut Vec<Value>) -> String {
    if parts.is_empty() {
        return empty.to_string();
    }
    let rendered: Vec<String> = parts.iter().map(|p| p.write_sql(params)).collect();
    format!("({})", rendered.join(sep))
}

/// `%needle%` with `%`, `_` and `\` escaped for `ESCAPE '\'`.
#[must_use]
pub fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
