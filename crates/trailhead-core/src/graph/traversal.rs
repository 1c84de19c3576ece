use std::fmt::Debug;
use std::hash::Hash;

/// Trait for providing undirected graph adjacency to the search engine
///
/// Implementations must be symmetric: if `b` is among the neighbors of `a`,
/// then `a` is among the neighbors of `b`. Neighbor order should be stable
/// for the duration of a search, since it determines frontier order.
pub trait GraphProvider {
    type Node: Clone + Eq + Hash + Debug;

    fn contains_node(&self, node: &Self::Node) -> bool;

    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;
}
