//! il item - Search the catalog
//!
//! The query words are joined with spaces, so `il item rarity:relic sword`
//! and `il item "rarity:relic sword"` are the same search.

use clap::Args;
use clap::builder::RangedU64ValueParser;

use crate::app::AppContext;
use crate::cli::formatters::SearchResults;
use crate::cli::output::{emit, emit_json, robot_ok_with_warnings};
use crate::error::{ErrorCode, Result, StructuredError};
use crate::search::{SearchEngine, SearchOptions};

#[derive(Args, Debug)]
pub struct ItemArgs {
    /// Search query: words, `a+b`, `a,b`, `a/b`, `key:value` filters, "quoted phrases"
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Maximum number of results (default: search.max_results)
    #[arg(long, short, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &ItemArgs) -> Result<()> {
    let query = args.query.join(" ");
    let catalog = ctx.catalog()?;

    let mut options = SearchOptions::from(&ctx.config);
    if let Some(limit) = args.limit {
        options.max_results = limit;
    }

    let outcome = SearchEngine::new(catalog, options).search(&query)?;

    if ctx.robot_mode {
        let warnings = if outcome.is_empty() {
            vec![no_results_warning(&outcome.query)]
        } else {
            Vec::new()
        };
        return emit_json(&robot_ok_with_warnings(&outcome, warnings));
    }

    let display = &ctx.config.display;
    emit(
        &SearchResults::new(&outcome, display.page_size, display.title_max_chars),
        ctx.output_format,
    );
    Ok(())
}

fn no_results_warning(query: &str) -> String {
    let notice = StructuredError::new(ErrorCode::SearchNoResults, "No items found")
        .with_context(serde_json::json!({ "query": query }));
    format!("{notice}. {}", notice.suggestion)
}
