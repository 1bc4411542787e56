use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{IlError, Result};
use crate::storage::Database;

/// Catalog file name inside the data root.
pub const DB_FILE: &str = "items.db";

pub struct AppContext {
    pub il_root: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
    /// Opened at startup when `items.db` exists.
    pub db: Option<Arc<Database>>,
    pub robot_mode: bool,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let il_root = find_il_root()?;
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| il_root.join("config.toml"));
        let config = Config::load(cli.config.as_deref(), &il_root)?;

        let db_path = il_root.join(DB_FILE);
        let db = if db_path.exists() {
            Some(Arc::new(Database::open_existing(&db_path)?))
        } else {
            debug!(path = %db_path.display(), "no catalog yet");
            None
        };

        Ok(Self {
            il_root,
            config_path,
            config,
            db,
            robot_mode: cli.robot,
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.il_root.join(DB_FILE)
    }

    /// The catalog handle, or [`IlError::CatalogUnavailable`] before `il init`.
    pub fn catalog(&self) -> Result<&Database> {
        self.db
            .as_deref()
            .ok_or_else(|| IlError::CatalogUnavailable(self.db_path().display().to_string()))
    }

    /// The catalog handle for writes, creating `items.db` when missing.
    pub fn catalog_for_write(&self) -> Result<Arc<Database>> {
        match self.db {
            Some(ref db) => Ok(Arc::clone(db)),
            None => Ok(Arc::new(Database::open(self.db_path())?)),
        }
    }
}

/// `$IL_ROOT`, else the nearest `.il/` above the working directory, else
/// `<data_dir>/il`.
pub fn find_il_root() -> Result<PathBuf> {
    if let Ok(root) = std::env::var("IL_ROOT") {
        return Ok(PathBuf::from(root));
    }
    let cwd = std::env::current_dir()?;
    if let Some(found) = find_upwards(&cwd, ".il") {
        return Ok(found);
    }

    global_il_root()
}

pub fn global_il_root() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| IlError::MissingConfig("data directory not found".to_string()))?;
    Ok(data_dir.join("il"))
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(name);
        if candidate.is_dir() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}
