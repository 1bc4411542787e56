//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod chat;
pub mod import;
pub mod init;
pub mod item;
pub mod random;
pub mod voi;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Init(args) => init::run_without_context(ctx.robot_mode, args),
        Commands::Import(args) => import::run(ctx, args),
        Commands::Item(args) => item::run(ctx, args),
        Commands::Random(args) => random::run(ctx, args),
        Commands::Voi(args) => voi::run(ctx, args),
        Commands::Chat(args) => chat::run(ctx, args),
    }
}
