use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrailheadError;

/// An ordered walk from a start node to an end node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Path<N> {
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of edges walked (one less than the number of nodes)
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl<N> From<Vec<N>> for Path<N> {
    fn from(nodes: Vec<N>) -> Self {
        Path { nodes }
    }
}

/// Frontier ordering policy selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Breadth-first: FIFO frontier, minimal paths
    #[default]
    Bfs,
    /// Depth-first: LIFO frontier
    Dfs,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Bfs, Strategy::Dfs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
        }
    }
}

impl FromStr for Strategy {
    type Err = TrailheadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            other => Err(TrailheadError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single search: the reconstructed paths plus statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<N> {
    pub from: N,
    pub to: N,
    pub strategy: &'static str,
    /// Whether the end node was expanded before the frontier ran dry
    pub found: bool,
    /// Number of nodes expanded during the search
    pub expanded: usize,
    pub paths: Vec<Path<N>>,
}

impl<N> SearchOutcome<N> {
    /// Edge count of the shortest returned path, if any
    pub fn path_length(&self) -> Option<usize> {
        self.paths.iter().map(Path::hop_count).min()
    }
}
