use crate::graph::{Digraph, MutableGraph};
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a rooted hierarchy with n vertices, shaped like a hypernym graph.
/// Vertex 0 is the single root; every other vertex points to between 1 and
/// `max_parents` distinct vertices with a smaller ID, so the result is a DAG
/// in which every vertex reaches the root. A `max_parents` of 0 is treated as 1.
pub fn generate_hierarchy<R: Rng + ?Sized>(n: usize, max_parents: usize, rng: &mut R) -> Digraph {
    let max_parents = max_parents.max(1);

    let mut graph = Digraph::with_capacity(n);

    for v in 1..n {
        let parent_count = rng.gen_range(1..=max_parents.min(v));
        let mut parents = HashSet::with_capacity(parent_count);

        // Bias towards recent vertices to get deep chains rather than a star
        while parents.len() < parent_count {
            let lower = v.saturating_sub(v / 4 + 1);
            let parent = if rng.gen_bool(0.8) {
                rng.gen_range(lower..v)
            } else {
                rng.gen_range(0..v)
            };
            parents.insert(parent);
        }

        let mut parents: Vec<usize> = parents.into_iter().collect();
        parents.sort_unstable();
        for parent in parents {
            graph.add_edge(v, parent);
        }
    }

    graph
}

/// Generates a random DAG with n vertices and roughly `edge_factor * n` edges.
/// Every edge points from a higher ID to a lower one; the graph may have several
/// roots and disconnected parts.
pub fn generate_random_dag<R: Rng + ?Sized>(n: usize, edge_factor: f64, rng: &mut R) -> Digraph {
    let mut graph = Digraph::with_capacity(n);
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let from = rng.gen_range(1..n);
        let to = rng.gen_range(0..from);
        graph.add_edge(from, to);
    }

    graph
}

/// Generates a random directed graph with n vertices and m edges.
/// Cycles, self-loops and parallel edges are all possible.
pub fn generate_random_digraph<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> Digraph {
    let mut graph = Digraph::with_capacity(n);
    if n == 0 {
        return graph;
    }

    for _ in 0..m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        graph.add_edge(from, to);
    }

    graph
}
