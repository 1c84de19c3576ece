/// Ordering policy for discovered-but-unexpanded nodes
///
/// The engine seeds the frontier through `add_to_frontier` and drains it
/// through `next_expandable`, adding newly discovered nodes between pops.
/// Implementations must therefore hand out nodes added after draining
/// began; a snapshot taken at the first pop would lose them.
pub trait Frontier<N> {
    /// Name reported in search outcomes and logs
    const NAME: &'static str = "custom";

    /// Set when nodes leave the frontier in non-decreasing distance from
    /// the start node. The engine then keeps only ancestors on the
    /// shortest layer, so every reconstructed path has minimal length.
    const LAYERED: bool = false;

    /// Slate a node for later expansion
    fn add_to_frontier(&mut self, node: N);

    /// Remove and return the next node to expand, or `None` once empty
    fn next_expandable(&mut self) -> Option<N>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every pending node
    fn clear(&mut self);
}
