//! Storage backends for the item catalog
//!
//! SQLite for the CLI and chat front end, an in-memory catalog for tests
//! and benchmarks.

pub mod memory;
pub mod migrations;
pub mod sqlite;

pub use memory::MemoryCatalog;
pub use sqlite::{Database, InsertStats};
