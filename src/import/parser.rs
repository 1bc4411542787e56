use serde_json::Value;
use tracing::warn;

use super::types::{ImportFormat, RawRecord};
use crate::catalog::{Item, Rarity};
use crate::error::{IlError, Result};

/// Parse `raw` into records according to `format`.
pub fn parse_records(raw: &str, format: ImportFormat) -> Result<Vec<RawRecord>> {
    match format {
        ImportFormat::Tsv => parse_tsv(raw),
        ImportFormat::Json => parse_json(raw),
        ImportFormat::Jsonl => parse_jsonl(raw),
    }
}

fn parse_tsv(raw: &str) -> Result<Vec<RawRecord>> {
    let mut lines = raw
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty());

    let header: Vec<String> = lines
        .next()
        .ok_or_else(|| IlError::Import("TSV input has no header row".to_string()))?
        .split('\t')
        .map(normalize_column)
        .collect();

    let records = lines
        .map(|line| {
            header
                .iter()
                .zip(line.split('\t'))
                .map(|(column, value)| (column.clone(), value.to_string()))
                .collect()
        })
        .collect();
    Ok(records)
}

fn parse_json(raw: &str) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(rows) = value else {
        return Err(IlError::Import("JSON input must be an array of objects".to_string()));
    };
    rows.iter()
        .enumerate()
        .map(|(idx, row)| record_from_json(row, idx + 1))
        .collect()
}

fn parse_jsonl(raw: &str) -> Result<Vec<RawRecord>> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let value: Value = serde_json::from_str(line)
                .map_err(|err| IlError::Import(format!("line {}: {err}", idx + 1)))?;
            record_from_json(&value, idx + 1)
        })
        .collect()
}

fn record_from_json(value: &Value, position: usize) -> Result<RawRecord> {
    let Value::Object(map) = value else {
        return Err(IlError::Import(format!("row {position} is not an object")));
    };
    Ok(map
        .iter()
        .map(|(key, value)| (normalize_column(key), json_text(value)))
        .collect())
}

fn json_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Turn a record into an item, or `None` when it has no name.
///
/// `item_name` wins over `name` when both columns exist.
#[must_use]
pub fn record_to_item(record: &RawRecord) -> Option<Item> {
    let field = |key: &str| record.get(key).map_or("", |v| v.trim());

    let name = Some(field("item_name"))
        .filter(|n| !n.is_empty())
        .or_else(|| Some(field("name")).filter(|n| !n.is_empty()))?;

    Some(Item {
        name: name.to_string(),
        category: field("category").to_lowercase(),
        subcategories: field("subcategories").to_lowercase(),
        rarity: Rarity::parse(&field("rarity").to_lowercase()),
        is_notable: is_truthy(field("voi")),
        notes: field("notes").to_string(),
    })
}

/// Convert records, counting the ones skipped for lack of a name.
#[must_use]
pub fn records_to_items(records: &[RawRecord]) -> (Vec<Item>, usize) {
    let mut items = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for (idx, record) in records.iter().enumerate() {
        match record_to_item(record) {
            Some(item) => items.push(item),
            None => {
                warn!(row = idx + 1, "skipping row without a name");
                skipped += 1;
            }
        }
    }
    (items, skipped)
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "yes" | "true" | "1")
}
