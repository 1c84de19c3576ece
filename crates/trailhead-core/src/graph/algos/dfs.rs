use super::shared::Frontier;

/// LIFO frontier: the most recently discovered node is expanded first.
#[derive(Debug, Clone)]
pub struct DepthFirst<N> {
    stack: Vec<N>,
}

impl<N> Default for DepthFirst<N> {
    fn default() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<N> DepthFirst<N> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N> Frontier<N> for DepthFirst<N> {
    const NAME: &'static str = "dfs";

    fn add_to_frontier(&mut self, node: N) {
        self.stack.push(node);
    }

    fn next_expandable(&mut self) -> Option<N> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}
