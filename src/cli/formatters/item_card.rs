//! Single item formatter, used by `il random`

use colored::Colorize;
use serde::Serialize;

use crate::catalog::{Item, Rarity};
use crate::cli::output::{Formattable, HumanLayout, OutputFormat, tsv_cell};

#[derive(Debug, Clone)]
pub struct ItemCard<'a> {
    pub title: &'a str,
    pub item: &'a Item,
}

#[derive(Serialize)]
struct ItemCardJson<'a> {
    status: &'static str,
    item: &'a Item,
    rarity_rank: u8,
}

impl<'a> ItemCard<'a> {
    #[must_use]
    pub const fn new(title: &'a str, item: &'a Item) -> Self {
        Self { title, item }
    }

    fn format_human(&self) -> String {
        let item = self.item;
        let mut layout = HumanLayout::new();
        layout
            .title(self.title)
            .kv("Name", &item.name.cyan().bold().to_string())
            .kv("Category", &item.category)
            .kv("Subcategories", &item.subcategories)
            .kv("Rarity", &rarity_label(item));
        if item.is_notable {
            layout.kv("VOI", &"yes".yellow().to_string());
        }
        if !item.notes.is_empty() {
            layout.blank().push_line(item.notes.dimmed().to_string());
        }
        layout.build()
    }
}

impl Formattable for ItemCard<'_> {
    fn format(&self, fmt: OutputFormat) -> String {
        let item = self.item;
        match fmt {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => serde_json::to_string_pretty(&ItemCardJson {
                status: "ok",
                item,
                rarity_rank: item.rarity.rank(),
            })
            .unwrap_or_default(),
            OutputFormat::Jsonl => serde_json::to_string(item).unwrap_or_default(),
            OutputFormat::Plain => format!(
                "{}\n{}\n{}\n{}",
                item.name, item.category, item.subcategories, item.rarity
            ),
            OutputFormat::Tsv => format!(
                "name\tcategory\tsubcategories\trarity\tvoi\n{}\t{}\t{}\t{}\t{}",
                tsv_cell(&item.name),
                tsv_cell(&item.category),
                tsv_cell(&item.subcategories),
                tsv_cell(item.rarity.as_str()),
                u8::from(item.is_notable)
            ),
        }
    }
}

/// Rarity text, emphasised for the top tiers.
#[must_use]
pub fn rarity_label(item: &Item) -> String {
    let text = item.rarity.as_str();
    match item.rarity {
        Rarity::Relic | Rarity::Legendary => text.bold().to_string(),
        Rarity::Other(_) => text.dimmed().to_string(),
        _ => text.to_string(),
    }
}
