//! Command implementations for all anscore commands

use tracing::debug;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{batch, metrics, quality, score};
use anscore_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Score(args) => score::execute(ctx.cli, &ctx.evaluator()?, args),
            Commands::Quality(args) => quality::execute(ctx.cli, &ctx.evaluator()?, args),
            Commands::Batch(args) => batch::execute(ctx.cli, &ctx.evaluator()?, args),
            Commands::Metrics => metrics::execute(ctx.cli),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
