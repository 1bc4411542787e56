//! SQLite catalog

use std::path::Path;

use rand::Rng;
use rusqlite::{Connection, Row, params, params_from_iter};
use tracing::{debug, warn};

use crate::catalog::{Catalog, Item, Rarity, rarity_rank_sql};
use crate::error::{IlError, Result};
use crate::search::Predicate;
use crate::storage::migrations;

const ITEM_COLUMNS: &str = "name, category, subcategories, rarity, voi, notes";

/// SQLite-backed item catalog
pub struct Database {
    conn: Connection,
    schema_version: u32,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}

/// Row counts from a bulk insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct InsertStats {
    pub inserted: usize,
    /// Rows ignored because the name already existed
    pub duplicates: usize,
}

impl Database {
    /// Open (or create) the catalog at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open a catalog that must already exist.
    ///
    /// Query commands use this so a missing `items.db` is reported instead
    /// of silently creating an empty catalog.
    pub fn open_existing(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IlError::CatalogUnavailable(path.display().to_string()));
        }
        Self::open(path)
    }

    /// Private in-memory catalog, mostly for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        Self::configure_pragmas(&conn)?;
        let schema_version = migrations::run_migrations(&conn)?;
        Ok(Self {
            conn,
            schema_version,
        })
    }

    /// Get a reference to the connection
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Current schema version after migrations.
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// Insert items in one transaction. Existing names are left untouched.
    pub fn insert_items(&self, items: &[Item]) -> Result<InsertStats> {
        let tx = self.conn.unchecked_transaction()?;
        let mut stats = InsertStats::default();
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO items (name, category, subcategories, rarity, voi, notes) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for item in items {
                let changed = stmt.execute(params![
                    item.name,
                    item.category,
                    item.subcategories,
                    item.rarity.as_str(),
                    i64::from(item.is_notable),
                    item.notes,
                ])?;
                if changed == 0 {
                    warn!(name = %item.name, "duplicate item name ignored");
                    stats.duplicates += 1;
                } else {
                    stats.inserted += 1;
                }
            }
        }
        tx.commit()?;
        Ok(stats)
    }

    fn query_items(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Item>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, item_from_row)?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA cache_size = -16000;
             PRAGMA temp_store = MEMORY;",
        )?;
        Ok(())
    }
}

impl Catalog for Database {
    fn find(&self, predicate: &Predicate, limit: usize) -> Result<Vec<Item>> {
        let (clause, mut values) = predicate.to_sql();
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE {clause} ORDER BY {}, name LIMIT ?",
            rarity_rank_sql()
        );
        debug!(%sql, params = values.len(), "catalog find");
        values.push(rusqlite::types::Value::Integer(
            i64::try_from(limit).unwrap_or(i64::MAX),
        ));
        self.query_items(&sql, params_from_iter(values))
    }

    fn random(&self) -> Result<Option<Item>> {
        let count = self.count()?;
        if count == 0 {
            return Ok(None);
        }
        let offset = rand::rng().random_range(0..count);
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY id LIMIT 1 OFFSET ?");
        let mut items = self.query_items(&sql, [i64::try_from(offset).unwrap_or(0)])?;
        Ok(items.pop())
    }

    fn notable(&self) -> Result<Vec<Item>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE COALESCE(voi, 0) != 0 ORDER BY {}, name",
            rarity_rank_sql()
        );
        self.query_items(&sql, [])
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    let text = |idx: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
    };
    Ok(Item {
        name: text(0)?,
        category: text(1)?,
        subcategories: text(2)?,
        rarity: Rarity::parse(&text(3)?),
        is_notable: row.get::<_, Option<i64>>(4)?.unwrap_or(0) != 0,
        notes: text(5)?,
    })
}
