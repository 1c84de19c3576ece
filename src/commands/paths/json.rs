use trailhead_core::error::Result;
use trailhead_core::graph::SearchOutcome;

/// Output paths in JSON format
pub fn output_paths_json(outcomes: &[SearchOutcome<u32>]) -> Result<()> {
    let json_output: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| {
            serde_json::json!({
                "from": outcome.from,
                "to": outcome.to,
                "strategy": outcome.strategy,
                "found": outcome.found,
                "path_length": outcome.path_length(),
                "expanded": outcome.expanded,
                "paths": outcome.paths,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&json_output)?);
    Ok(())
}
