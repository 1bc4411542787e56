//! il random - Show one random item

use clap::Args;

use crate::app::AppContext;
use crate::catalog::Catalog;
use crate::cli::formatters::ItemCard;
use crate::cli::output::{emit, emit_json, robot_ok};
use crate::error::{IlError, Result};

#[derive(Args, Debug)]
pub struct RandomArgs {}

pub fn run(ctx: &AppContext, _args: &RandomArgs) -> Result<()> {
    let item = ctx.catalog()?.random()?.ok_or(IlError::CatalogEmpty)?;

    if ctx.robot_mode {
        return emit_json(&robot_ok(&item));
    }

    emit(&ItemCard::new("Random Item", &item), ctx.output_format);
    Ok(())
}
