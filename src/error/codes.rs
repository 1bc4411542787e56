//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Item errors
//! - 3xx: Config errors
//! - 4xx: Search errors
//! - 6xx: Storage errors
//! - 7xx: Import errors
//! - 9xx: IO errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `CatalogEmpty` -> E102).
/// Codes are grouped by category for easy identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Item errors (1xx)
    // ========================================
    /// E102: The catalog has no rows yet
    CatalogEmpty,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Search errors (4xx)
    // ========================================
    /// E401: Search query is shorter than the configured minimum
    SearchQueryTooShort,
    /// E403: Search returned zero results
    SearchNoResults,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Catalog database is missing or cannot be opened
    CatalogUnavailable,
    /// E604: Database operation failed
    DatabaseError,
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Import errors (7xx)
    // ========================================
    /// E701: Import source could not be parsed or written
    ImportFailed,

    // ========================================
    // IO errors (9xx)
    // ========================================
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `CatalogEmpty` -> 102).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::CatalogEmpty => 102,

            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,

            Self::SearchQueryTooShort => 401,
            Self::SearchNoResults => 403,

            Self::CatalogUnavailable => 601,
            Self::DatabaseError => 604,
            Self::SerializationError => 605,

            Self::ImportFailed => 701,

            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E102").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::CatalogEmpty => "Load items with `il import <file>` before searching",

            Self::ConfigInvalid => "Check TOML syntax and value ranges in the config file and IL_* environment variables",
            Self::ConfigMissingRequired => "Set the missing value in config.toml or through its IL_* environment variable",

            Self::SearchQueryTooShort => "Provide at least 2 characters to search for",
            Self::SearchNoResults => "Try broader terms, an OR search (`sword,flame`), or fewer filters",

            Self::CatalogUnavailable => "Run `il init` and `il import <file>` to create the catalog, or set IL_ROOT",
            Self::DatabaseError => "The catalog database may be locked or corrupted. Re-run `il init` and re-import",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",

            Self::ImportFailed => "Check that the file is TSV with a header row, a JSON array, or JSONL",

            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::CatalogEmpty
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::SearchQueryTooShort
            | Self::SearchNoResults
            | Self::CatalogUnavailable
            | Self::ImportFailed
            | Self::IoError => true,

            Self::DatabaseError | Self::SerializationError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "item",
            3 => "config",
            4 => "search",
            6 => "storage",
            7 => "import",
            9 => "io",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::CatalogEmpty,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::SearchQueryTooShort,
            Self::SearchNoResults,
            Self::CatalogUnavailable,
            Self::DatabaseError,
            Self::SerializationError,
            Self::ImportFailed,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
