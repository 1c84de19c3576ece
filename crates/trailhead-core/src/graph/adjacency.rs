//! In-memory undirected adjacency list
//!
//! Neighbors are kept in edge insertion order so that search results are
//! deterministic for a given edge list.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrailheadError};
use crate::graph::GraphProvider;

/// Serializable node/edge listing, e.g. `{"nodes": [0, 1], "edges": [[0, 1]]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition<N> {
    /// Nodes to include even when they have no edges
    #[serde(default = "Vec::new")]
    pub nodes: Vec<N>,
    pub edges: Vec<(N, N)>,
}

/// Undirected graph backed by an adjacency list
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N> {
    adjacency: HashMap<N, Vec<N>>,
    /// Node insertion order, for stable listing
    order: Vec<N>,
    edge_count: usize,
}

impl<N> Default for UndirectedGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<N: Clone + Eq + Hash + Debug> UndirectedGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list; endpoints are added as nodes
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N)>) -> Self {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Build a graph from a parsed definition
    pub fn from_definition(definition: GraphDefinition<N>) -> Result<Self> {
        let mut graph = Self::new();
        for node in definition.nodes {
            graph.add_node(node);
        }
        for (a, b) in definition.edges {
            if a == b {
                return Err(TrailheadError::invalid_graph(format!(
                    "self-loop on {:?}",
                    a
                )));
            }
            graph.add_edge(a, b);
        }
        Ok(graph)
    }

    /// Add a node; returns false if it was already present
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.order.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Add an undirected edge; duplicate edges are ignored
    pub fn add_edge(&mut self, a: N, b: N) -> bool {
        self.add_node(a.clone());
        self.add_node(b.clone());

        let Some(a_neighbors) = self.adjacency.get_mut(&a) else {
            return false;
        };
        if a_neighbors.contains(&b) {
            return false;
        }
        a_neighbors.push(b.clone());

        if a != b {
            if let Some(b_neighbors) = self.adjacency.get_mut(&b) {
                b_neighbors.push(a);
            }
        }

        self.edge_count += 1;
        true
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// Convert back into a definition, listing each edge once
    pub fn to_definition(&self) -> GraphDefinition<N> {
        let mut edges = Vec::with_capacity(self.edge_count);
        let mut position: HashMap<&N, usize> = HashMap::with_capacity(self.order.len());
        for (idx, node) in self.order.iter().enumerate() {
            position.insert(node, idx);
        }

        for (idx, node) in self.order.iter().enumerate() {
            for neighbor in self.adjacency.get(node).into_iter().flatten() {
                if position.get(neighbor).is_some_and(|&n_idx| n_idx >= idx) {
                    edges.push((node.clone(), neighbor.clone()));
                }
            }
        }

        GraphDefinition {
            nodes: self.order.clone(),
            edges,
        }
    }
}

impl<N: Clone + Eq + Hash + Debug> GraphProvider for UndirectedGraph<N> {
    type Node = N;

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_symmetric() {
        let graph = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
        assert_eq!(graph.neighbors(&1), vec![0, 2]);
        assert_eq!(graph.neighbors(&0), vec![1]);
        assert_eq!(graph.neighbors(&2), vec![1]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_duplicate_edges_ignored() {
        let mut graph = UndirectedGraph::new();
        assert!(graph.add_edge("a", "b"));
        assert!(!graph.add_edge("b", "a"));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&"a"), vec!["b"]);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let graph = UndirectedGraph::from_edges([(0, 1)]);
        assert!(!graph.contains_node(&5));
        assert!(graph.neighbors(&5).is_empty());
    }

    #[test]
    fn test_from_definition_keeps_isolated_nodes() {
        let definition: GraphDefinition<u32> =
            serde_json::from_str(r#"{"nodes": [7], "edges": [[0, 1]]}"#).unwrap();
        let graph = UndirectedGraph::from_definition(definition).unwrap();
        assert!(graph.contains_node(&7));
        assert!(graph.neighbors(&7).is_empty());
        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![7, 0, 1]);
    }

    #[test]
    fn test_from_definition_rejects_self_loop() {
        let definition = GraphDefinition {
            nodes: vec![],
            edges: vec![(3u32, 3u32)],
        };
        let err = UndirectedGraph::from_definition(definition).unwrap_err();
        assert!(matches!(err, TrailheadError::InvalidGraph { .. }));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Data);
    }

    #[test]
    fn test_to_definition_lists_each_edge_once() {
        let graph = UndirectedGraph::from_edges([(1, 0), (0, 2), (2, 1)]);
        let definition = graph.to_definition();
        assert_eq!(definition.nodes, vec![1, 0, 2]);
        assert_eq!(definition.edges, vec![(1, 0), (1, 2), (0, 2)]);
    }
}
