//! il import - Load items from a spreadsheet export

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::import::{ImportFormat, import_file};

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// File to import (TSV with header, JSON array, or JSONL)
    pub file: PathBuf,

    /// Source format; detected from the extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<ImportFormat>,
}

pub fn run(ctx: &AppContext, args: &ImportArgs) -> Result<()> {
    let db = ctx.catalog_for_write()?;
    let report = import_file(&db, &args.file, args.format)?;

    if ctx.robot_mode || ctx.output_format.is_machine_readable() {
        return emit_json(&robot_ok(report));
    }

    println!(
        "{} Imported {} item(s) from {}",
        "✓".green().bold(),
        report.inserted,
        args.file.display()
    );
    if report.duplicates > 0 {
        println!(
            "  {} {} duplicate name(s) already in the catalog",
            "!".yellow(),
            report.duplicates
        );
    }
    if report.skipped > 0 {
        println!("  {} {} row(s) without a name skipped", "!".yellow(), report.skipped);
    }

    Ok(())
}
