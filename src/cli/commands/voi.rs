//! il voi - List notable items

use clap::Args;
use clap::builder::RangedU64ValueParser;

use crate::app::AppContext;
use crate::cli::formatters::NotableList;
use crate::cli::output::{emit, emit_json, robot_ok};
use crate::error::Result;
use crate::search::{SearchEngine, SearchOptions};

#[derive(Args, Debug)]
pub struct VoiArgs {
    /// Rows to show (default: display.notable_limit)
    #[arg(long, short, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &VoiArgs) -> Result<()> {
    let mut options = SearchOptions::from(&ctx.config);
    if let Some(limit) = args.limit {
        options.notable_limit = limit;
    }

    let listing = SearchEngine::new(ctx.catalog()?, options).notable()?;

    if ctx.robot_mode {
        return emit_json(&robot_ok(&listing));
    }

    emit(&NotableList::new(&listing), ctx.output_format);
    Ok(())
}
