//! Catalog rows and the rarity rank table.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Known rarities in rank order, paired with the rank used for sorting.
///
/// Anything not listed here ranks [`Rarity::OTHER_RANK`].
pub const RARITY_RANKS: [(&str, u8); 5] = [
    ("relic", 1),
    ("legendary", 2),
    ("named", 3),
    ("hallowtide", 4),
    ("normal", 5),
];

/// Item rarity.
///
/// Parsing never fails: unknown spellings land in [`Rarity::Other`] and keep
/// their original text so they can be displayed unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rarity {
    Relic,
    Legendary,
    Named,
    Hallowtide,
    Normal,
    Other(String),
}

impl Rarity {
    /// Rank given to every rarity outside the known table.
    pub const OTHER_RANK: u8 = 6;

    /// Parse a rarity, ignoring case and surrounding ASCII whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim_ascii().to_ascii_lowercase().as_str() {
            "relic" => Self::Relic,
            "legendary" => Self::Legendary,
            "named" => Self::Named,
            "hallowtide" => Self::Hallowtide,
            "normal" => Self::Normal,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Sort rank: relic=1 through normal=5, everything else 6.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Relic => 1,
            Self::Legendary => 2,
            Self::Named => 3,
            Self::Hallowtide => 4,
            Self::Normal => 5,
            Self::Other(_) => Self::OTHER_RANK,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Relic => "relic",
            Self::Legendary => "legendary",
            Self::Named => "named",
            Self::Hallowtide => "hallowtide",
            Self::Normal => "normal",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for Rarity {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Rarity {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for Rarity {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        match rarity {
            Rarity::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub subcategories: String,
    pub rarity: Rarity,
    /// Source column `voi`.
    pub is_notable: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl Item {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_subcategories(mut self, subcategories: impl Into<String>) -> Self {
        self.subcategories = subcategories.into();
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<Rarity>) -> Self {
        self.rarity = rarity.into();
        self
    }

    #[must_use]
    pub const fn notable(mut self, is_notable: bool) -> Self {
        self.is_notable = is_notable;
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Catalog order: rarity rank ascending, then name by byte order.
#[must_use]
pub fn catalog_order(a: &Item, b: &Item) -> Ordering {
    a.rarity
        .rank()
        .cmp(&b.rarity.rank())
        .then_with(|| a.name.as_bytes().cmp(b.name.as_bytes()))
}

/// `column` with the same whitespace removed as [`str::trim_ascii`].
///
/// Plain `TRIM(x)` in SQLite only strips spaces.
#[must_use]
pub fn trimmed_sql(column: &str) -> String {
    format!("TRIM({column}, ' ' || char(9, 10, 12, 13))")
}

/// SQL expression that computes [`Rarity::rank`] from the `rarity` column.
#[must_use]
pub fn rarity_rank_sql() -> String {
    let arms: String = RARITY_RANKS
        .iter()
        .map(|(name, rank)| format!(" WHEN '{name}' THEN {rank}"))
        .collect();
    format!(
        "CASE LOWER({}){arms} ELSE {} END",
        trimmed_sql("rarity"),
        Rarity::OTHER_RANK
    )
}
