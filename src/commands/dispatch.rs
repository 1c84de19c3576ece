//! Command dispatch logic for trailhead

use std::time::Instant;

use tracing::debug;
use trailhead_core::config::TrailheadConfig;
use trailhead_core::error::Result;
use trailhead_core::format::OutputFormat;

use crate::cli::{Cli, Commands};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: TrailheadConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: TrailheadConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Output format: explicit flag first, then configuration
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.format)
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
        println!("trailhead {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Find every path between two nodes with breadth-first and depth-first search.");
        println!();
        println!("Run `trailhead --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Paths(args) => super::paths::execute(ctx, args),
            Commands::Maze => super::maze::execute(ctx),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = TrailheadConfig::load_or_default(cli.config.as_deref())?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
