use crate::algorithm::bfs::DistanceMap;
use crate::graph::Graph;
use crate::Result;

/// Trait for algorithms that compute unweighted distances from a set of sources
pub trait ReachabilityAlgorithm<G>
where
    G: Graph + ?Sized,
{
    /// Compute, for every vertex, the distance from the nearest of `sources`
    fn compute_distances(&self, graph: &G, sources: &[usize]) -> Result<DistanceMap>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute distances from a single source vertex
    fn compute_from(&self, graph: &G, source: usize) -> Result<DistanceMap> {
        self.compute_distances(graph, &[source])
    }
}
