use rayon::prelude::*;

use crate::algorithm::bfs::{DistanceMap, MultiSourceBfs};
use crate::algorithm::ReachabilityAlgorithm;
use crate::graph::{Digraph, Graph};
use crate::{Error, Result};

/// A shortest ancestral path found by a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestralPath {
    /// Total number of edges on both legs
    pub length: usize,

    /// Common ancestor where the two legs meet
    pub ancestor: usize,

    /// Vertex on the `v` side the path starts from
    pub from: usize,

    /// Vertex on the `w` side the path ends at
    pub to: usize,

    /// Vertices from `from` up to `ancestor` and back down to `to`
    pub path: Vec<usize>,
}

/// Shortest ancestral path queries over an immutable copy of a directed graph
///
/// Every query owns its working state, so one `Sap` can serve concurrent
/// callers through a shared reference.
#[derive(Debug, Clone)]
pub struct Sap {
    graph: Digraph,
    bfs: MultiSourceBfs,
}

impl Sap {
    /// Creates a query engine over a private copy of `graph`.
    /// Later changes to `graph` do not affect the results.
    pub fn new<G: Graph + ?Sized>(graph: &G) -> Self {
        Sap {
            graph: Digraph::from_graph(graph),
            bfs: MultiSourceBfs::new(),
        }
    }

    /// Creates a query engine that takes ownership of `graph`, skipping the copy
    pub fn from_digraph(graph: Digraph) -> Self {
        Sap {
            graph,
            bfs: MultiSourceBfs::new(),
        }
    }

    /// The graph queries run against
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Length of a shortest ancestral path between `v` and `w`, or `None` if
    /// they have no common ancestor
    pub fn length(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.query(v, w)?.map(|p| p.length))
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path, or `None`
    /// if they have no common ancestor
    pub fn ancestor(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.query(v, w)?.map(|p| p.ancestor))
    }

    /// Length of a shortest ancestral path between any vertex of `v` and any
    /// vertex of `w`, or `None` if no pair has a common ancestor
    pub fn length_sets<V, W>(&self, v: V, w: W) -> Result<Option<usize>>
    where
        V: IntoIterator<Item = usize>,
        W: IntoIterator<Item = usize>,
    {
        Ok(self.query_sets(v, w)?.map(|p| p.length))
    }

    /// A common ancestor on a shortest ancestral path between the two sets,
    /// or `None` if no pair has a common ancestor
    pub fn ancestor_sets<V, W>(&self, v: V, w: W) -> Result<Option<usize>>
    where
        V: IntoIterator<Item = usize>,
        W: IntoIterator<Item = usize>,
    {
        Ok(self.query_sets(v, w)?.map(|p| p.ancestor))
    }

    /// Shortest ancestral path between two vertices
    pub fn query(&self, v: usize, w: usize) -> Result<Option<AncestralPath>> {
        for vertex in [v, w] {
            if !self.graph.has_vertex(vertex) {
                return Err(Error::invalid_vertex(vertex, self.graph.vertex_count()));
            }
        }

        log::debug!("SAP query v={} w={}", v, w);
        self.run(&[v], &[w])
    }

    /// Shortest ancestral path between two vertex sets
    ///
    /// Runs one BFS per side from the whole set rather than one per member.
    pub fn query_sets<V, W>(&self, v: V, w: W) -> Result<Option<AncestralPath>>
    where
        V: IntoIterator<Item = usize>,
        W: IntoIterator<Item = usize>,
    {
        let v = self.validate_set(v, "v")?;
        let w = self.validate_set(w, "w")?;

        log::debug!("SAP set query |v|={} |w|={}", v.len(), w.len());
        self.run(&v, &w)
    }

    /// Answers a batch of pair queries in parallel, results in input order
    pub fn query_many(&self, pairs: &[(usize, usize)]) -> Vec<Result<Option<AncestralPath>>> {
        pairs.par_iter().map(|&(v, w)| self.query(v, w)).collect()
    }

    fn validate_set<I>(&self, vertices: I, side: &str) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = usize>,
    {
        let vertices: Vec<usize> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return Err(Error::InvalidArgument(format!("vertex set {} is empty", side)));
        }
        if let Some(&bad) = vertices.iter().find(|&&x| !self.graph.has_vertex(x)) {
            return Err(Error::InvalidArgument(format!(
                "vertex set {} contains {}, outside 0..{}",
                side,
                bad,
                self.graph.vertex_count()
            )));
        }
        Ok(vertices)
    }

    fn run(&self, v: &[usize], w: &[usize]) -> Result<Option<AncestralPath>> {
        let from_v = self.bfs.compute_distances(&self.graph, v)?;
        let from_w = self.bfs.compute_distances(&self.graph, w)?;

        let result = closest_common_ancestor(&from_v, &from_w)
            .and_then(|(ancestor, length)| assemble_path(&from_v, &from_w, ancestor, length));

        match &result {
            Some(p) => log::debug!("SAP found length={} ancestor={}", p.length, p.ancestor),
            None => log::debug!("SAP found no common ancestor"),
        }
        Ok(result)
    }
}

/// Scans every vertex in increasing order and returns the one reachable from
/// both sides with the smallest combined distance. Ties go to the lowest ID.
fn closest_common_ancestor(from_v: &DistanceMap, from_w: &DistanceMap) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;

    for i in 0..from_v.len() {
        if let (Some(dv), Some(dw)) = (from_v.dist_to(i), from_w.dist_to(i)) {
            let combined = dv + dw;
            if best.map_or(true, |(_, shortest)| combined < shortest) {
                best = Some((i, combined));
            }
        }
    }

    best
}

fn assemble_path(
    from_v: &DistanceMap,
    from_w: &DistanceMap,
    ancestor: usize,
    length: usize,
) -> Option<AncestralPath> {
    let mut path = from_v.path_to(ancestor)?;
    let down = from_w.path_to(ancestor)?;
    path.extend(down.iter().rev().skip(1));

    Some(AncestralPath {
        length,
        ancestor,
        from: from_v.origin_of(ancestor)?,
        to: from_w.origin_of(ancestor)?,
        path,
    })
}
