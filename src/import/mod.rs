//! Bulk import of catalog rows from spreadsheet exports.
//!
//! Accepts TSV with a header row, a JSON array of objects, or JSONL.
//! Recognised columns: `item_name` (or `name`), `category`, `subcategories`,
//! `rarity`, `voi`, `notes`. Other columns are ignored.
//!
//! ```ignore
//! let db = Database::open(root.join("items.db"))?;
//! let report = il::import::import_file(&db, Path::new("items.tsv"), None)?;
//! println!("{} inserted, {} skipped", report.inserted, report.skipped);
//! ```

mod parser;
mod types;

use std::path::Path;

use tracing::info;

pub use parser::{parse_records, record_to_item, records_to_items};
pub use types::{ImportFormat, ImportReport, RawRecord};

use crate::error::{IlError, Result};
use crate::storage::Database;

/// Read `path` and insert its rows into `db` in one transaction.
///
/// `format` overrides detection by file extension.
pub fn import_file(db: &Database, path: &Path, format: Option<ImportFormat>) -> Result<ImportReport> {
    let format = format.unwrap_or_else(|| ImportFormat::from_path(path));
    let raw = std::fs::read_to_string(path)
        .map_err(|err| IlError::Import(format!("read {}: {err}", path.display())))?;
    import_str(db, &raw, format)
}

/// Insert rows parsed from an in-memory string.
pub fn import_str(db: &Database, raw: &str, format: ImportFormat) -> Result<ImportReport> {
    let records = parse_records(raw, format)?;
    let (items, skipped) = records_to_items(&records);
    let stats = db.insert_items(&items)?;

    let report = ImportReport {
        format: Some(format),
        rows: records.len(),
        inserted: stats.inserted,
        duplicates: stats.duplicates,
        skipped,
    };
    info!(
        rows = report.rows,
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped,
        "import complete"
    );
    Ok(report)
}
