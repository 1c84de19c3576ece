use std::collections::VecDeque;

use super::shared::Frontier;

/// FIFO frontier: nodes are expanded in discovery order, so expansion
/// proceeds in non-decreasing distance from the start node.
#[derive(Debug, Clone)]
pub struct BreadthFirst<N> {
    queue: VecDeque<N>,
}

impl<N> Default for BreadthFirst<N> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<N> BreadthFirst<N> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N> Frontier<N> for BreadthFirst<N> {
    const NAME: &'static str = "bfs";
    const LAYERED: bool = true;

    fn add_to_frontier(&mut self, node: N) {
        self.queue.push_back(node);
    }

    fn next_expandable(&mut self) -> Option<N> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}
