//! Search results formatter

use console::style;
use itertools::Itertools;
use serde::Serialize;

use super::item_card::rarity_label;
use crate::catalog::Item;
use crate::cli::output::{Formattable, OutputFormat, tsv_cell};
use crate::search::{QueryMode, SearchOutcome};

/// A search outcome plus the display limits used to page it.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    pub outcome: &'a SearchOutcome,
    pub page_size: usize,
    pub title_max_chars: usize,
}

/// Serializable search result for JSON output
#[derive(Debug, Clone, Serialize)]
struct SearchResultJson<'a> {
    name: &'a str,
    category: &'a str,
    subcategories: &'a str,
    rarity: &'a str,
    rarity_rank: u8,
    is_notable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    matched_terms: Vec<&'a str>,
}

/// Serializable search response for JSON output
#[derive(Debug, Clone, Serialize)]
struct SearchResponseJson<'a> {
    status: &'static str,
    query: &'a str,
    #[serde(flatten)]
    mode: &'a QueryMode,
    title: String,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    results: Vec<SearchResultJson<'a>>,
}

impl<'a> SearchResults<'a> {
    #[must_use]
    pub const fn new(outcome: &'a SearchOutcome, page_size: usize, title_max_chars: usize) -> Self {
        Self {
            outcome,
            page_size,
            title_max_chars,
        }
    }

    fn result_json(&self, item: &'a Item) -> SearchResultJson<'a> {
        SearchResultJson {
            name: &item.name,
            category: &item.category,
            subcategories: &item.subcategories,
            rarity: item.rarity.as_str(),
            rarity_rank: item.rarity.rank(),
            is_notable: item.is_notable,
            matched_terms: self.outcome.matched_terms(item),
        }
    }

    fn to_json_response(&self) -> SearchResponseJson<'a> {
        let outcome = self.outcome;
        SearchResponseJson {
            status: "ok",
            query: &outcome.query,
            mode: &outcome.mode,
            title: crate::search::truncate_chars(&outcome.title(), self.title_max_chars),
            count: outcome.total,
            message: outcome.is_empty().then(|| outcome.no_results_message()),
            results: outcome.items.iter().map(|item| self.result_json(item)).collect(),
        }
    }

    fn format_human(&self) -> String {
        let outcome = self.outcome;
        if outcome.is_empty() {
            return format!("{} {}", style("!").yellow(), outcome.no_results_message());
        }

        let mut out = String::new();
        let active = outcome.active_filters();
        let mut position = 0;

        for (page_idx, page) in outcome
            .pages(self.page_size, self.title_max_chars)
            .iter()
            .enumerate()
        {
            if page_idx > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{}\n", style(&page.title).bold()));
            if page_idx == 0 {
                out.push_str(&format!("{}\n", style(outcome.description()).dim()));
                if !active.is_empty() {
                    let filters = active
                        .iter()
                        .map(|(label, value)| format!("{label}={value}"))
                        .join(" ");
                    out.push_str(&format!("{} {filters}\n", style("filters:").dim()));
                }
            }
            out.push('\n');

            for item in page.items {
                position += 1;
                let matched = outcome.matched_terms(item);
                let name = if matched.is_empty() {
                    style(&item.name).cyan().to_string()
                } else {
                    style(&item.name).cyan().bold().to_string()
                };
                out.push_str(&format!(
                    "{}. {name} {}{}\n",
                    style(position).dim(),
                    rarity_label(item),
                    if item.is_notable {
                        format!(" {}", style("[VOI]").yellow())
                    } else {
                        String::new()
                    }
                ));
                out.push_str(&format!(
                    "   {} {}  {} {}\n",
                    style("type:").dim(),
                    item.category,
                    style("sub:").dim(),
                    item.subcategories
                ));
            }
        }

        out
    }

    fn format_plain(&self) -> String {
        if self.outcome.is_empty() {
            return self.outcome.no_results_message();
        }
        self.outcome
            .items
            .iter()
            .map(|item| format!("{} [{}]", item.name, item.rarity))
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut out = String::from("name\tcategory\tsubcategories\trarity\tvoi\n");
        for item in &self.outcome.items {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                tsv_cell(&item.name),
                tsv_cell(&item.category),
                tsv_cell(&item.subcategories),
                tsv_cell(item.rarity.as_str()),
                u8::from(item.is_notable)
            ));
        }
        out
    }

    fn format_jsonl(&self) -> String {
        self.outcome
            .items
            .iter()
            .filter_map(|item| serde_json::to_string(&self.result_json(item)).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formattable for SearchResults<'_> {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&self.to_json_response()).unwrap_or_default()
            }
            OutputFormat::Jsonl => self.format_jsonl(),
            OutputFormat::Plain => self.format_plain(),
            OutputFormat::Tsv => self.format_tsv(),
        }
    }
}
