use std::collections::VecDeque;

use crate::algorithm::ReachabilityAlgorithm;
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a multi-source breadth-first search
///
/// Every vertex of the graph has an entry. Unreached vertices have no distance,
/// no predecessor and no origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    /// Number of edges from the nearest source to each vertex
    distances: Vec<Option<usize>>,

    /// Predecessor vertices in the BFS forest
    predecessors: Vec<Option<usize>>,

    /// Source each vertex was first reached from
    origins: Vec<Option<usize>>,

    /// Source vertex IDs, deduplicated, in the order they were given
    sources: Vec<usize>,
}

impl DistanceMap {
    /// Returns true if some source has a directed path to `vertex`
    pub fn has_path_to(&self, vertex: usize) -> bool {
        self.dist_to(vertex).is_some()
    }

    /// Number of edges on a shortest path from the nearest source, if reachable
    pub fn dist_to(&self, vertex: usize) -> Option<usize> {
        self.distances.get(vertex).copied().flatten()
    }

    /// The source a shortest path to `vertex` starts from
    pub fn origin_of(&self, vertex: usize) -> Option<usize> {
        self.origins.get(vertex).copied().flatten()
    }

    /// Vertices of a shortest path from the nearest source to `vertex`, source first
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        let length = self.dist_to(vertex)?;

        let mut path = Vec::with_capacity(length + 1);
        let mut current = vertex;
        path.push(current);
        while let Some(pred) = self.predecessors[current] {
            path.push(pred);
            current = pred;
        }
        path.reverse();

        debug_assert_eq!(path.len(), length + 1);
        Some(path)
    }

    /// Number of vertices reachable from at least one source (sources included)
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Source vertices the search was seeded with
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Number of vertices covered by this map
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the map covers no vertices
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distances for every vertex, indexed by vertex ID
    pub fn distances(&self) -> &[Option<usize>] {
        &self.distances
    }
}

/// Breadth-first search seeded simultaneously from several sources
///
/// All sources are enqueued at distance 0 before the traversal starts, so a
/// single O(V + E) pass yields the distance from the nearest source.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultiSourceBfs;

impl MultiSourceBfs {
    /// Creates a new multi-source BFS instance
    pub fn new() -> Self {
        MultiSourceBfs
    }
}

impl<G> ReachabilityAlgorithm<G> for MultiSourceBfs
where
    G: Graph + ?Sized,
{
    fn name(&self) -> &'static str {
        "MultiSourceBFS"
    }

    fn compute_distances(&self, graph: &G, sources: &[usize]) -> Result<DistanceMap> {
        if sources.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one source vertex is required".to_string(),
            ));
        }
        if let Some(&bad) = sources.iter().find(|&&s| !graph.has_vertex(s)) {
            return Err(Error::invalid_vertex(bad, graph.vertex_count()));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<usize>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut origins: Vec<Option<usize>> = vec![None; n];
        let mut seeded = Vec::with_capacity(sources.len());
        let mut queue = VecDeque::with_capacity(sources.len());

        for &source in sources {
            if distances[source].is_none() {
                distances[source] = Some(0);
                origins[source] = Some(source);
                seeded.push(source);
                queue.push_back(source);
            }
        }

        while let Some(u) = queue.pop_front() {
            // Every queued vertex has a distance
            let next = distances[u].map_or(0, |d| d + 1);
            for v in graph.successors(u) {
                if distances[v].is_none() {
                    distances[v] = Some(next);
                    predecessors[v] = Some(u);
                    origins[v] = origins[u];
                    queue.push_back(v);
                }
            }
        }

        let result = DistanceMap {
            distances,
            predecessors,
            origins,
            sources: seeded,
        };
        log::trace!(
            "BFS from {} source(s) reached {} of {} vertices",
            result.sources.len(),
            result.reachable_count(),
            n
        );

        Ok(result)
    }
}
