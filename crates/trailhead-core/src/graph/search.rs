mod path;


use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, trace};

use crate::error::{Result, TrailheadError};
use crate::graph::algos::{BreadthFirst, DepthFirst, Frontier};
use crate::graph::types::{Path, SearchOutcome, Strategy};
use crate::graph::GraphProvider;
use path::AncestorMap;

/// State owned by a single `find_paths` call
struct SearchState<N> {
    expanded: HashSet<N>,
    ancestors: AncestorMap<N>,
    /// Edge distance at first discovery, used by layered frontiers
    depth: HashMap<N, usize>,
}

impl<N: Clone + Eq + std::hash::Hash> SearchState<N> {
    fn new(start: &N) -> Self {
        let mut depth = HashMap::new();
        depth.insert(start.clone(), 0);
        Self {
            expanded: HashSet::new(),
            ancestors: AncestorMap::new(),
            depth,
        }
    }
}

/// All-paths search over a borrowed graph, ordered by frontier `F`
pub struct GraphSearch<'g, G: GraphProvider, F> {
    graph: &'g G,
    frontier: F,
}

/// Breadth-first search; every returned path has minimal length
pub type BreadthFirstSearch<'g, G> = GraphSearch<'g, G, BreadthFirst<<G as GraphProvider>::Node>>;

/// Depth-first search; returns the paths found along the first branch explored
pub type DepthFirstSearch<'g, G> = GraphSearch<'g, G, DepthFirst<<G as GraphProvider>::Node>>;

impl<'g, G: GraphProvider> BreadthFirstSearch<'g, G> {
    pub fn breadth_first(graph: &'g G) -> Self {
        Self::new(graph)
    }
}

impl<'g, G: GraphProvider> DepthFirstSearch<'g, G> {
    pub fn depth_first(graph: &'g G) -> Self {
        Self::new(graph)
    }
}

impl<'g, G, F> GraphSearch<'g, G, F>
where
    G: GraphProvider,
    F: Frontier<G::Node>,
{
    pub fn new(graph: &'g G) -> Self
    where
        F: Default,
    {
        Self::with_frontier(graph, F::default())
    }

    pub fn with_frontier(graph: &'g G, frontier: F) -> Self {
        Self { graph, frontier }
    }

    /// Find all paths between `start` and `end`.
    ///
    /// With a layered frontier (BFS) this is every minimal path; otherwise it
    /// is whatever subset the frontier order uncovers before `end` is
    /// expanded. Returns an empty list when `end` cannot be reached and
    /// `UnknownNode` when either node is absent from the graph.
    pub fn find_paths(&mut self, start: &G::Node, end: &G::Node) -> Result<Vec<Path<G::Node>>> {
        self.search(start, end).map(|outcome| outcome.paths)
    }

    /// Like `find_paths`, but also reports search statistics
    #[tracing::instrument(skip(self), fields(strategy = F::NAME))]
    pub fn search(&mut self, start: &G::Node, end: &G::Node) -> Result<SearchOutcome<G::Node>> {
        let started = Instant::now();

        for node in [start, end] {
            if !self.graph.contains_node(node) {
                return Err(TrailheadError::unknown_node(node));
            }
        }

        self.frontier.clear();
        let mut state = SearchState::new(start);
        self.frontier.add_to_frontier(start.clone());

        while let Some(node) = self.frontier.next_expandable() {
            // A node may be queued once per discoverer; expand it only once
            if state.expanded.contains(&node) {
                continue;
            }

            self.expand_node(&mut state, node);

            if state.expanded.contains(end) {
                debug!(expanded = state.expanded.len(), pending = self.frontier.len(), "end_reached");
                break;
            }
        }

        let found = state.expanded.contains(end);
        if !found {
            debug!(expanded = state.expanded.len(), "frontier_exhausted");
        }

        let paths = state.ancestors.build_paths(start, end);
        crate::trace_time!(started, "search", paths = paths.len());

        Ok(SearchOutcome {
            from: start.clone(),
            to: end.clone(),
            strategy: F::NAME,
            found,
            expanded: state.expanded.len(),
            paths,
        })
    }

    fn expand_node(&mut self, state: &mut SearchState<G::Node>, node: G::Node) {
        let node_depth = state.depth.get(&node).copied().unwrap_or(0);
        let next_depth = node_depth + 1;
        let mut discovered = 0usize;

        for neighbor in self.graph.neighbors(&node) {
            // A self-loop never extends a simple path
            if neighbor == node || state.expanded.contains(&neighbor) {
                continue;
            }

            let first_seen = match state.depth.get(&neighbor) {
                None => {
                    state.depth.insert(neighbor.clone(), next_depth);
                    true
                }
                // Same-layer or deeper discoverers would add longer paths
                Some(&depth) if F::LAYERED && depth != next_depth => continue,
                Some(_) => false,
            };

            self.frontier.add_to_frontier(neighbor.clone());
            state.ancestors.record(node.clone(), neighbor);
            if first_seen {
                discovered += 1;
            }
        }

        trace!(node = ?node, depth = node_depth, discovered, "expand_node");
        state.expanded.insert(node);
    }
}

/// Run a search with the strategy picked at runtime
pub fn run_search<G: GraphProvider>(
    graph: &G,
    strategy: Strategy,
    start: &G::Node,
    end: &G::Node,
) -> Result<SearchOutcome<G::Node>> {
    match strategy {
        Strategy::Bfs => BreadthFirstSearch::breadth_first(graph).search(start, end),
        Strategy::Dfs => DepthFirstSearch::depth_first(graph).search(start, end),
    }
}
