//! CLI argument parsing for trailhead
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --config, --quiet, --verbose

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{PathsArgs, StrategyChoice};
use parse::parse_output_format;
use trailhead_core::format::OutputFormat;

/// Trailhead - find every path through a maze with BFS and DFS
#[derive(Parser, Debug)]
#[command(name = "trailhead")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json); defaults to the configured format
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// TOML configuration file
    #[arg(long, global = true, env = "TRAILHEAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "trailhead_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find all paths between two nodes
    Paths(PathsArgs),

    /// Print the bundled maze
    Maze,
}
