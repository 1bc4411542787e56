//! The item catalog: row types and the read interface every backend serves.
//!
//! Two backends implement [`Catalog`]: the SQLite [`crate::storage::Database`]
//! used by the CLI and [`crate::storage::MemoryCatalog`] used in tests and
//! benchmarks. Both honour the same ordering contract, see [`catalog_order`].

mod item;

pub use item::{Item, RARITY_RANKS, Rarity, catalog_order, rarity_rank_sql, trimmed_sql};

use crate::error::Result;
use crate::search::Predicate;

/// Read access to the item catalog.
///
/// Implementations take `&self` and keep no per-query state, so one handle
/// can serve every request for the lifetime of the process.
pub trait Catalog {
    /// Rows matching `predicate`, ordered by rarity rank then name, at most `limit`.
    fn find(&self, predicate: &Predicate, limit: usize) -> Result<Vec<Item>>;

    /// One row chosen uniformly at random, or `None` for an empty catalog.
    fn random(&self) -> Result<Option<Item>>;

    /// Every notable row in catalog order.
    fn notable(&self) -> Result<Vec<Item>>;

    /// Total number of rows.
    fn count(&self) -> Result<usize>;
}
