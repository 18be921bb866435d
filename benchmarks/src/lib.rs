//! Graph generators shared by the degrees benchmark suites.

use degrees_search::adjacency::AdjacencyGraph;

/// Path graph `0 - 1 - … - (n-1)`; edge `i` joins `i` and `i + 1`.
#[must_use]
pub fn chain_graph(n: u32) -> AdjacencyGraph<u32, u32> {
    let mut g = AdjacencyGraph::new(format!("chain-{n}"));
    g.add_state(0);
    for i in 1..n {
        g.add_edge(i - 1, i - 1, i);
    }
    g
}

/// `width × height` 4-connected grid; state `y * width + x`.
///
/// Many equal-length paths between opposite corners, so it exercises
/// frontier duplicate suppression more than [`chain_graph`].
#[must_use]
pub fn grid_graph(width: u32, height: u32) -> AdjacencyGraph<u32, u32> {
    let mut g = AdjacencyGraph::new(format!("grid-{width}x{height}"));
    let mut edge = 0u32;
    for y in 0..height {
        for x in 0..width {
            let s = y * width + x;
            g.add_state(s);
            if x + 1 < width {
                g.add_edge(s, edge, s + 1);
                edge += 1;
            }
            if y + 1 < height {
                g.add_edge(s, edge, s + width);
                edge += 1;
            }
        }
    }
    g
}
