pub mod app;
pub mod bot;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod search;
pub mod storage;

pub use error::{IlError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
