use trailhead_core::format::format_path;
use trailhead_core::graph::SearchOutcome;

use crate::cli::Cli;

/// Output paths in human-readable format
pub fn output_paths_human(cli: &Cli, outcomes: &[SearchOutcome<u32>]) {
    for outcome in outcomes {
        let label = outcome.strategy.to_uppercase();

        if outcome.paths.is_empty() {
            println!(
                "{} Paths: none from {} to {}",
                label, outcome.from, outcome.to
            );
        } else {
            println!("{} Paths ({}):", label, outcome.paths.len());
            for path in &outcome.paths {
                println!("  {}", format_path(path));
            }
        }

        if !cli.quiet {
            println!("  expanded {} nodes", outcome.expanded);
        }
    }
}
