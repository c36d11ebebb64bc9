use std::fmt::Debug;

/// Trait representing an unweighted directed graph over vertices `0..vertex_count()`
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the heads of the edges leaving a vertex, in insertion order
    fn successors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.has_vertex(from) && self.successors(from).any(|target| target == to)
    }

    /// Returns the number of edges leaving a vertex
    fn outdegree(&self, vertex: usize) -> usize {
        self.successors(vertex).count()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices.
    /// Returns false if either endpoint is not a vertex of the graph.
    fn add_edge(&mut self, from: usize, to: usize) -> bool;
}
