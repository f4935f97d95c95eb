//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use anscore_core::config::EngineConfig;
use anscore_core::error::Result;
use anscore_core::metrics::Evaluator;

/// Resolve the engine configuration, applying the `--backend` override
pub fn resolve_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = EngineConfig::discover(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Build the evaluator once configuration and backend are settled
    pub fn evaluator(&self) -> Result<Evaluator> {
        let evaluator = Evaluator::new(resolve_config(self.cli)?)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            backend = evaluator.backend_name(),
            "build_evaluator"
        );
        Ok(evaluator)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("anscore {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Multi-metric scoring of free-text answers.");
        println!();
        println!("Run `anscore --help` for usage information.");
        Ok(())
    }
}
