//! Maze command: print the bundled maze
use trailhead_core::error::Result;
use trailhead_core::format::OutputFormat;

use super::dispatch::CommandContext;
use crate::maze::make_maze_graph;

/// Execute the maze command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let definition = make_maze_graph().to_definition();

    match ctx.format() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&definition)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Maze: {} junctions, {} corridors",
                    definition.nodes.len(),
                    definition.edges.len()
                );
            }
            for (a, b) in &definition.edges {
                println!("{} -- {}", a, b);
            }
        }
    }

    Ok(())
}
