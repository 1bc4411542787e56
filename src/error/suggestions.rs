//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with messages
//! that mention the offending query, path, or config key.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
///
/// Falls back to [`ErrorCode::suggestion`] when the context carries nothing
/// more specific.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::SearchQueryTooShort => suggest_query_too_short(context),
        ErrorCode::SearchNoResults => suggest_search_no_results(context),
        ErrorCode::CatalogUnavailable => suggest_catalog_unavailable(context),
        ErrorCode::ConfigMissingRequired => suggest_config_missing_required(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_query_too_short(context: Option<&Value>) -> String {
    let min_chars = context
        .and_then(|c| c.get("min_chars"))
        .and_then(Value::as_u64);

    match min_chars {
        Some(min) => format!("Please provide at least {min} characters to search for."),
        None => ErrorCode::SearchQueryTooShort.suggestion().to_string(),
    }
}

fn suggest_search_no_results(context: Option<&Value>) -> String {
    let query = context
        .and_then(|c| c.get("query"))
        .and_then(Value::as_str);

    match query {
        Some(q) if !q.is_empty() => format!(
            "No results for '{q}'. Try:\n  - Broader search terms\n  - An OR search such as `sword,flame`\n  - Dropping a filter like `rarity:` or `voi:`"
        ),
        _ => ErrorCode::SearchNoResults.suggestion().to_string(),
    }
}

fn suggest_catalog_unavailable(context: Option<&Value>) -> String {
    let path = context
        .and_then(|c| c.get("path"))
        .and_then(Value::as_str);

    match path {
        Some(path) => format!(
            "No catalog at {path}. Run `il init` then `il import <file>`, or point IL_ROOT at an existing catalog"
        ),
        None => ErrorCode::CatalogUnavailable.suggestion().to_string(),
    }
}

fn suggest_config_missing_required(context: Option<&Value>) -> String {
    let config_key = context
        .and_then(|c| c.get("config_key"))
        .and_then(Value::as_str);

    match config_key {
        Some(key) => format!("Required config '{key}' is missing. Set it in config.toml"),
        None => ErrorCode::ConfigMissingRequired.suggestion().to_string(),
    }
}
