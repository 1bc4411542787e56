//! il init - Create the catalog root, database and default config

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::app::{DB_FILE, global_il_root};
use crate::cli::output::{emit_json, robot_ok};
use crate::config::Config;
use crate::error::Result;
use crate::storage::Database;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Initialize globally (<data_dir>/il) instead of locally (.il/)
    #[arg(long)]
    pub global: bool,

    /// Rewrite config.toml even if it already exists
    #[arg(long, short)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct InitReport {
    pub root: PathBuf,
    pub db: PathBuf,
    pub config: PathBuf,
    pub schema_version: u32,
    pub items: usize,
    pub config_written: bool,
    pub already_initialized: bool,
}

/// Runs before any `AppContext` exists, since the root may not exist yet.
pub fn run_without_context(robot: bool, args: &InitArgs) -> Result<()> {
    let target = init_target(args.global)?;
    let already_initialized = target.join(DB_FILE).exists();

    if robot {
        let report = initialize(&target, args.force)?;
        return emit_json(&robot_ok(report));
    }

    println!("{}", "Initializing il...".bold());
    println!();
    let report = initialize(&target, args.force)?;

    println!("Catalog database      {}", "OK".green());
    println!(
        "Default configuration {}",
        if report.config_written {
            "OK".green()
        } else {
            "kept".yellow()
        }
    );
    println!();

    if already_initialized {
        println!(
            "{} Already initialized at {} ({} items)",
            "!".yellow(),
            target.display(),
            report.items
        );
    } else {
        println!("{} Initialized at {}", "✓".green().bold(), target.display());
        println!();
        println!("Load items with:");
        println!("  il import items.tsv");
    }

    Ok(())
}

/// `$IL_ROOT`, else the global root with `--global`, else `./.il`.
pub fn init_target(global: bool) -> Result<PathBuf> {
    if let Ok(root) = std::env::var("IL_ROOT") {
        return Ok(PathBuf::from(root));
    }
    if global {
        return global_il_root();
    }
    Ok(std::env::current_dir()?.join(".il"))
}

/// Create `target`, migrate `items.db` and seed `config.toml`.
///
/// Safe to repeat: existing rows are untouched and the config is only
/// rewritten with `force`.
pub fn initialize(target: &Path, force: bool) -> Result<InitReport> {
    fs::create_dir_all(target)?;

    let db_path = target.join(DB_FILE);
    let already_initialized = db_path.exists();
    let db = Database::open(&db_path)?;
    let items = crate::catalog::Catalog::count(&db)?;

    let config_path = target.join("config.toml");
    let config_written = force || !config_path.exists();
    if config_written {
        let body = format!(
            "# il configuration\n\n{}",
            Config::default().to_toml()?
        );
        fs::write(&config_path, body)?;
    }

    info!(
        root = %target.display(),
        schema_version = db.schema_version(),
        config_written,
        "catalog root ready"
    );

    Ok(InitReport {
        root: target.to_path_buf(),
        db: db_path,
        config: config_path,
        schema_version: db.schema_version(),
        items,
        config_written,
        already_initialized,
    })
}
