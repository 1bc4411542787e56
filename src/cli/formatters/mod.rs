//! Output formatters for CLI commands
//!
//! Provides structured formatters for common output types that can render
//! to multiple formats (Human, JSON, JSONL, Plain, TSV).

mod item_card;
mod notable_list;
mod search_results;

pub use item_card::{ItemCard, rarity_label};
pub use notable_list::NotableList;
pub use search_results::SearchResults;
