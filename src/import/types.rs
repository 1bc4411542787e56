use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

/// Source file layout for `il import`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    /// Tab separated values with a header row
    Tsv,
    /// A JSON array of objects
    Json,
    /// One JSON object per line
    Jsonl,
}

impl ImportFormat {
    /// Guess from the file extension, defaulting to TSV.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("jsonl" | "ndjson") => Self::Jsonl,
            _ => Self::Tsv,
        }
    }
}

/// One source row keyed by normalised (trimmed, lower-cased) column name.
pub type RawRecord = BTreeMap<String, String>;

/// Totals reported after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub format: Option<ImportFormat>,
    /// Rows read from the source
    pub rows: usize,
    pub inserted: usize,
    /// Rows whose name was already in the catalog
    pub duplicates: usize,
    /// Rows without a name
    pub skipped: usize,
}
