//! Graph search and path reconstruction
//!
//! Provides the all-paths search engine over undirected graphs:
//! - Frontier strategies (BFS, DFS) deciding expansion order
//! - Search engine with ancestor tracking and early termination
//! - Graph provider trait for pluggable adjacency sources

pub mod adjacency;
pub mod algos;
pub mod search;
pub mod traversal;
pub mod types;

pub use adjacency::{GraphDefinition, UndirectedGraph};
pub use algos::{BreadthFirst, DepthFirst, Frontier};
pub use search::{run_search, BreadthFirstSearch, DepthFirstSearch, GraphSearch};
pub use traversal::GraphProvider;
pub use types::{Path, SearchOutcome, Strategy};
