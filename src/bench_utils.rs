use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::graph::{Digraph, DigraphBuilder, VertexId};

/// Shapes of synthetic single-rooted hierarchies. Vertex `0` is always the
/// root and every edge points from a larger id to a smaller one, so every
/// generated graph is acyclic.
#[derive(Clone, Debug)]
pub enum HierarchyShape {
    Chain,
    Star,
    Tree { branching: usize },
    RandomDag { max_parents: usize },
}

pub fn generate_hierarchy(shape: HierarchyShape, node_count: usize, seed: u64) -> Digraph {
    assert!(node_count > 0, "node_count must be positive");
    let mut builder = DigraphBuilder::new(node_count);
    match shape {
        HierarchyShape::Chain => {
            for v in 1..node_count {
                link(&mut builder, v, v - 1);
            }
        }
        HierarchyShape::Star => {
            for v in 1..node_count {
                link(&mut builder, v, 0);
            }
        }
        HierarchyShape::Tree { branching } => {
            assert!(branching > 0, "branching must be positive");
            for v in 1..node_count {
                link(&mut builder, v, (v - 1) / branching);
            }
        }
        HierarchyShape::RandomDag { max_parents } => {
            assert!(max_parents > 0, "max_parents must be positive");
            let mut rng = StdRng::seed_from_u64(seed);
            for v in 1..node_count {
                let parents = rng.gen_range(1..=max_parents.min(v));
                let mut picked: Vec<VertexId> = Vec::with_capacity(parents);
                while picked.len() < parents {
                    let candidate = rng.gen_range(0..v);
                    if !picked.contains(&candidate) {
                        picked.push(candidate);
                    }
                }
                for parent in picked {
                    link(&mut builder, v, parent);
                }
            }
        }
    }
    builder.build()
}

/// Deterministic query pairs for benchmarks.
pub fn sample_queries(node_count: usize, count: usize, seed: u64) -> Vec<(VertexId, VertexId)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}

fn link(builder: &mut DigraphBuilder, from: VertexId, to: VertexId) {
    // ids come from 0..node_count
    let _ = builder.add_edge(from, to);
}
