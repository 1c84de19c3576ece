//! The bundled maze: 25 junctions (0-24) joined by corridors.

use trailhead_core::graph::UndirectedGraph;

/// Number of junctions in the maze
pub const MAZE_NODES: u32 = 25;

/// Corridors between junctions
const MAZE_EDGES: [(u32, u32); 24] = [
    (1, 0),
    (0, 2),
    (2, 3),
    (2, 4),
    (4, 5),
    (5, 7),
    (5, 6),
    (4, 8),
    (8, 9),
    (8, 10),
    (10, 12),
    (10, 11),
    (11, 13),
    (11, 14),
    (14, 15),
    (14, 16),
    (16, 17),
    (16, 18),
    (18, 19),
    (18, 20),
    (20, 21),
    (20, 22),
    (22, 23),
    (22, 24),
];

/// Build the maze graph
pub fn make_maze_graph() -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();
    for node in 0..MAZE_NODES {
        graph.add_node(node);
    }
    for (a, b) in MAZE_EDGES {
        graph.add_edge(a, b);
    }
    graph
}
