use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Parallel edges and self-loops are kept as given; traversals tolerate both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    /// Outgoing edges for each vertex: vertex_id -> [target_vertex]
    adjacency: Vec<Vec<usize>>,

    /// Number of edges pointing into each vertex
    indegree: Vec<usize>,

    /// Total number of edges
    edge_count: usize,
}

impl Digraph {
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        Digraph::default()
    }

    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        Digraph {
            adjacency: vec![Vec::new(); vertices],
            indegree: vec![0; vertices],
            edge_count: 0,
        }
    }

    /// Like `with_capacity`, but reports an allocation failure instead of aborting
    pub fn try_with_capacity(vertices: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        let mut indegree = Vec::new();
        adjacency
            .try_reserve_exact(vertices)
            .and_then(|_| indegree.try_reserve_exact(vertices))
            .map_err(|_| Error::Parse(format!("cannot allocate a graph with {} vertices", vertices)))?;
        adjacency.resize_with(vertices, Vec::new);
        indegree.resize(vertices, 0);

        Ok(Digraph {
            adjacency,
            indegree,
            edge_count: 0,
        })
    }

    /// Builds a graph with `vertices` vertices from a list of `(from, to)` pairs
    pub fn from_edges(vertices: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Digraph::with_capacity(vertices);
        for &(from, to) in edges {
            if !graph.add_edge(from, to) {
                return Err(Error::InvalidEdge(from, to));
            }
        }
        Ok(graph)
    }

    /// Copies the adjacency structure of any graph into a `Digraph`
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        let mut copy = Digraph::with_capacity(graph.vertex_count());
        for v in 0..graph.vertex_count() {
            for w in graph.successors(v) {
                copy.add_edge(v, w);
            }
        }
        copy
    }

    /// Number of edges pointing into `vertex`, or `None` if it is not a vertex
    pub fn indegree(&self, vertex: usize) -> Option<usize> {
        self.indegree.get(vertex).copied()
    }

    /// Outgoing adjacency of `vertex` as a slice
    pub fn adjacent(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the graph with every edge reversed
    pub fn reverse(&self) -> Self {
        let mut reversed = Digraph::with_capacity(self.vertex_count());
        for (v, targets) in self.adjacency.iter().enumerate() {
            for &w in targets {
                reversed.add_edge(w, v);
            }
        }
        reversed
    }

    /// Vertices with no outgoing edges (the roots of a hypernym hierarchy)
    pub fn roots(&self) -> Vec<usize> {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(v, _)| v)
            .collect()
    }

    /// Iterates over every edge as a `(from, to)` pair
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(v, targets)| targets.iter().map(move |&w| (v, w)))
    }
}

impl Graph for Digraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn successors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.adjacent(vertex).iter().copied())
    }

    fn outdegree(&self, vertex: usize) -> usize {
        self.adjacent(vertex).len()
    }
}

impl MutableGraph for Digraph {
    fn add_vertex(&mut self) -> usize {
        let new_id = self.adjacency.len();
        self.adjacency.push(Vec::new());
        self.indegree.push(0);
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        self.adjacency[from].push(to);
        self.indegree[to] += 1;
        self.edge_count += 1;
        true
    }
}
