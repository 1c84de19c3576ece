//! Output format handling for trailhead
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrailheadError;
use crate::graph::Path;

/// Output format for trailhead commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrailheadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(TrailheadError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a path as `a -> b -> c`
pub fn format_path<N: fmt::Display>(path: &Path<N>) -> String {
    path.nodes()
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
