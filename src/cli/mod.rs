//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod formatters;
pub mod output;

/// Item Lookup - search a game item catalog with plain, AND/OR and filter queries
#[derive(Parser, Debug)]
#[command(name = "il")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit JSON envelopes (`status`, `data`, structured errors) for scripts
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color mode: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: <root>/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl Cli {
    /// Get the effective output format.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format (shorthand)
    /// 4. `--robot` → JSON format
    /// 5. Default → Human format
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.plain {
            return OutputFormat::Plain;
        }

        if let Some(fmt) = self.output_format {
            return fmt;
        }

        if self.machine || self.robot {
            return OutputFormat::Json;
        }

        OutputFormat::Human
    }

    /// Check if plain mode is forced via CLI flags or color mode.
    #[must_use]
    pub fn force_plain(&self) -> bool {
        self.plain || self.color == Some(ColorMode::Never)
    }

    /// Check if rich mode is forced via CLI flags.
    #[must_use]
    pub fn force_rich(&self) -> bool {
        self.color == Some(ColorMode::Always)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the catalog root, database and default config
    Init(commands::init::InitArgs),

    /// Load items from a TSV, JSON or JSONL file
    Import(commands::import::ImportArgs),

    /// Search the catalog
    Item(commands::item::ItemArgs),

    /// Show one random item
    Random(commands::random::RandomArgs),

    /// List items flagged VOI (value of interest)
    Voi(commands::voi::VoiArgs),

    /// Answer prefixed chat commands read line by line from stdin
    Chat(commands::chat::ChatArgs),
}
