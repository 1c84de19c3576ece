//! Frontier strategies
//!
//! Each strategy decides the order in which discovered nodes are expanded:
//! - `bfs`: FIFO queue, yields minimal-length paths
//! - `dfs`: LIFO stack
//! - `shared`: the `Frontier` trait both implement

pub mod bfs;
pub mod dfs;
pub mod shared;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use shared::Frontier;
