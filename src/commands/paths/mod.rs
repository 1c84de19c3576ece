//! Paths command: run one or more strategies between two nodes
mod human;
mod json;

use std::fs;
use std::path::Path;
use std::time::Instant;

use trailhead_core::error::{Result, TrailheadError};
use trailhead_core::format::OutputFormat;
use trailhead_core::graph::{run_search, GraphDefinition, SearchOutcome, UndirectedGraph};
use trailhead_core::trace_time;

use super::dispatch::CommandContext;
use crate::cli::PathsArgs;
use crate::maze::make_maze_graph;

/// Load a JSON graph definition from disk
fn load_graph(path: &Path) -> Result<UndirectedGraph<u32>> {
    let content = fs::read_to_string(path)?;
    let definition: GraphDefinition<u32> =
        serde_json::from_str(&content).map_err(TrailheadError::invalid_graph)?;
    UndirectedGraph::from_definition(definition)
}

/// Execute the paths command
pub fn execute(ctx: &CommandContext, args: &PathsArgs) -> Result<()> {
    let start = Instant::now();

    let graph = match &args.graph {
        Some(path) => load_graph(path)?,
        None => make_maze_graph(),
    };
    trace_time!(start, "load_graph", nodes = graph.node_count());

    let from = args.from.unwrap_or(ctx.config.search.from);
    let to = args.to.unwrap_or(ctx.config.search.to);
    let strategies = match args.strategy {
        Some(choice) => choice.strategies(),
        None => ctx.config.search.strategies.clone(),
    };

    let outcomes = strategies
        .into_iter()
        .map(|strategy| run_search(&graph, strategy, &from, &to))
        .collect::<Result<Vec<SearchOutcome<u32>>>>()?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), searches = outcomes.len(), "paths_complete");

    match ctx.format() {
        OutputFormat::Json => json::output_paths_json(&outcomes)?,
        OutputFormat::Human => human::output_paths_human(ctx.cli, &outcomes),
    }

    Ok(())
}
