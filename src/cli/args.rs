use std::path::PathBuf;

use clap::{Args, ValueEnum};
use trailhead_core::graph::Strategy;

#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    /// Start node (defaults to the configured start, 0 for the maze)
    #[arg(long)]
    pub from: Option<u32>,

    /// End node (defaults to the configured end, 17 for the maze)
    #[arg(long)]
    pub to: Option<u32>,

    /// Search strategy to run
    #[arg(long, short, value_enum)]
    pub strategy: Option<StrategyChoice>,

    /// JSON graph file (`{"nodes": [...], "edges": [[a, b], ...]}`) to search instead of the maze
    #[arg(long)]
    pub graph: Option<PathBuf>,
}

/// Which strategies the `paths` command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyChoice {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Breadth-first, then depth-first
    Both,
}

impl StrategyChoice {
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyChoice::Bfs => vec![Strategy::Bfs],
            StrategyChoice::Dfs => vec![Strategy::Dfs],
            StrategyChoice::Both => Strategy::ALL.to_vec(),
        }
    }
}
