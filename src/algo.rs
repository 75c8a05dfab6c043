use crate::{
    errors::SapError,
    graph::{Digraph, VertexId},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Returns one directed cycle if the graph has any, closed on its first
/// vertex (`[a, b, c, a]`), rotated so the smallest id comes first.
pub fn find_cycle(graph: &Digraph) -> Option<Vec<VertexId>> {
    let count = graph.vertex_count();
    let mut color = vec![Color::White; count];
    let mut parent = vec![usize::MAX; count];
    for start in 0..count {
        if color[start] != Color::White {
            continue;
        }
        // (vertex, index of the next neighbor to inspect)
        let mut stack = vec![(start, 0usize)];
        color[start] = Color::Gray;
        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let neighbors = graph.neighbors(node);
            if frame.1 == neighbors.len() {
                color[node] = Color::Black;
                stack.pop();
                continue;
            }
            let next = neighbors[frame.1];
            frame.1 += 1;
            match color[next] {
                Color::White => {
                    color[next] = Color::Gray;
                    parent[next] = node;
                    stack.push((next, 0));
                }
                Color::Gray => return Some(trace_cycle(&parent, node, next)),
                Color::Black => {}
            }
        }
    }
    None
}

/// Vertices with out-degree zero, in ascending order.
pub fn roots(graph: &Digraph) -> Vec<VertexId> {
    (0..graph.vertex_count())
        .filter(|&v| graph.outdegree(v) == 0)
        .collect()
}

/// Checks that the graph is acyclic with exactly one root and returns it.
pub fn validate_rooted_dag(graph: &Digraph) -> Result<VertexId, SapError> {
    if let Some(cycle) = find_cycle(graph) {
        return Err(SapError::structure(format!("graph has a cycle {cycle:?}")));
    }
    match roots(graph).as_slice() {
        [root] => Ok(*root),
        [] => Err(SapError::structure("graph has no root")),
        many => Err(SapError::structure(format!(
            "graph is not single rooted: {} roots",
            many.len()
        ))),
    }
}

fn trace_cycle(parent: &[VertexId], from: VertexId, to: VertexId) -> Vec<VertexId> {
    let mut cycle = vec![from];
    let mut current = from;
    while current != to {
        current = parent[current];
        cycle.push(current);
    }
    cycle.reverse();
    if let Some((min_idx, _)) = cycle.iter().enumerate().min_by_key(|(_, value)| *value) {
        cycle.rotate_left(min_idx);
    }
    let first = cycle[0];
    cycle.push(first);
    cycle
}
