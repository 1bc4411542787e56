//! Notable (VOI) listing formatter

use console::style;
use serde::Serialize;

use super::item_card::rarity_label;
use crate::catalog::Item;
use crate::cli::output::{Formattable, OutputFormat, tsv_cell};
use crate::search::NotableListing;

#[derive(Debug, Clone)]
pub struct NotableList<'a> {
    pub listing: &'a NotableListing,
}

#[derive(Serialize)]
struct NotableListJson<'a> {
    status: &'static str,
    total: usize,
    shown: usize,
    truncated: bool,
    items: &'a [Item],
}

impl<'a> NotableList<'a> {
    #[must_use]
    pub const fn new(listing: &'a NotableListing) -> Self {
        Self { listing }
    }

    fn format_human(&self) -> String {
        let listing = self.listing;
        if listing.total == 0 {
            return format!("{} No VOI items found.", style("!").yellow());
        }

        let mut out = format!(
            "{}\n{}\n\n",
            style("VOI Items").bold(),
            style(listing.description()).dim()
        );
        for (idx, item) in listing.items.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. {} {}  {}\n",
                idx + 1,
                style(&item.name).cyan(),
                rarity_label(item),
                style(&item.category).dim()
            ));
        }
        if let Some(footer) = listing.footer() {
            out.push_str(&format!("\n{}\n", style(footer).dim()));
        }
        out
    }
}

impl Formattable for NotableList<'_> {
    fn format(&self, fmt: OutputFormat) -> String {
        let listing = self.listing;
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => serde_json::to_string_pretty(&NotableListJson {
                status: "ok",
                total: listing.total,
                shown: listing.items.len(),
                truncated: listing.is_truncated(),
                items: &listing.items,
            })
            .unwrap_or_default(),
            OutputFormat::Jsonl => listing
                .items
                .iter()
                .filter_map(|item| serde_json::to_string(item).ok())
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Plain => {
                let mut lines: Vec<String> =
                    listing.items.iter().map(|item| item.name.clone()).collect();
                lines.extend(listing.footer());
                lines.join("\n")
            }
            OutputFormat::Tsv => {
                let mut out = String::from("name\tcategory\trarity\n");
                for item in &listing.items {
                    out.push_str(&format!(
                        "{}\t{}\t{}\n",
                        tsv_cell(&item.name),
                        tsv_cell(&item.category),
                        tsv_cell(item.rarity.as_str())
                    ));
                }
                out
            }
        }
    }
}
