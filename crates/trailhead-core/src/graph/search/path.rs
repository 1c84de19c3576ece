use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::types::Path;

/// Back-references recorded during expansion: node -> nodes it was
/// discovered from, first discoverer first.
#[derive(Debug)]
pub(super) struct AncestorMap<N> {
    parents: HashMap<N, Vec<N>>,
}

impl<N: Clone + Eq + Hash> AncestorMap<N> {
    pub(super) fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Record `parent` as an immediate predecessor of `child`; a node is
    /// never its own ancestor
    pub(super) fn record(&mut self, parent: N, child: N) {
        if parent == child {
            return;
        }
        let parents = self.parents.entry(child).or_default();
        if !parents.contains(&parent) {
            parents.push(parent);
        }
    }

    pub(super) fn ancestors(&self, node: &N) -> &[N] {
        self.parents.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Walk the back-references from `end` to `start`, producing every path.
    ///
    /// Memoizes reachability of `start` per node, not path lists: shared
    /// sub-paths are re-walked once per combination that uses them.
    ///
    /// A node without ancestors terminates a path only if it is `start`;
    /// any other such node was never discovered and contributes nothing,
    /// so an undiscovered `end` yields no paths. Paths are ordered by the
    /// ancestor chosen at `end` first, then at each earlier node.
    pub(super) fn build_paths(&self, start: &N, end: &N) -> Vec<Path<N>> {
        let reaches = self.reaches_start(start, end);
        if !reaches.get(end).copied().unwrap_or(false) {
            return Vec::new();
        }

        let mut paths = Vec::new();
        // (node, index of the next ancestor to try)
        let mut trail: Vec<(N, usize)> = vec![(end.clone(), 0)];

        loop {
            let Some((node, next_parent)) = trail.last_mut() else {
                break;
            };

            let parents = self.ancestors(node);
            if parents.is_empty() {
                let nodes: Vec<N> = trail.iter().rev().map(|(n, _)| n.clone()).collect();
                paths.push(Path::from(nodes));
                trail.pop();
                continue;
            }

            let mut next = None;
            while *next_parent < parents.len() {
                let parent = &parents[*next_parent];
                *next_parent += 1;
                if reaches.get(parent).copied().unwrap_or(false) {
                    next = Some(parent.clone());
                    break;
                }
            }

            match next {
                Some(parent) => trail.push((parent, 0)),
                None => {
                    trail.pop();
                }
            }
        }

        paths
    }

    /// Memoized "does following ancestors from this node lead to `start`"
    /// for every node reachable backwards from `end`.
    ///
    /// Computed post-order with an explicit stack so long ancestor chains
    /// stay off the call stack; shared sub-chains are resolved once.
    fn reaches_start(&self, start: &N, end: &N) -> HashMap<N, bool> {
        let mut memo: HashMap<N, bool> = HashMap::new();
        let mut stack: Vec<(N, bool)> = vec![(end.clone(), false)];

        while let Some((node, parents_done)) = stack.pop() {
            if memo.contains_key(&node) {
                continue;
            }

            let parents = self.ancestors(&node);
            if parents.is_empty() {
                let is_start = &node == start;
                memo.insert(node, is_start);
                continue;
            }

            if !parents_done {
                stack.push((node, true));
                for parent in parents {
                    if !memo.contains_key(parent) {
                        stack.push((parent.clone(), false));
                    }
                }
                continue;
            }

            let reaches = parents
                .iter()
                .any(|parent| memo.get(parent).copied().unwrap_or(false));
            memo.insert(node, reaches);
        }

        memo
    }
}
