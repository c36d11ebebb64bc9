//! SAP Graph - Shortest Ancestral Path queries over directed graphs
//!
//! An ancestral path between two vertices `v` and `w` is a pair of directed
//! paths `v -> a` and `w -> a` that meet at a common ancestor `a`. The shortest
//! ancestral path (SAP) minimises the total number of edges over every such `a`.
//!
//! Queries run one multi-source breadth-first search per side and a single
//! linear scan over the vertices, so the set-to-set form costs the same
//! O(V + E) as the pair form.

pub mod algorithm;
pub mod boundary;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod web;

pub use algorithm::{
    bfs::{DistanceMap, MultiSourceBfs},
    sap::{AncestralPath, Sap},
};
/// Re-export main types for convenient use
pub use graph::directed::Digraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {vertex} (expected 0..{vertex_count})")]
    InvalidVertex { vertex: i64, vertex_count: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Malformed edge list: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_vertex(vertex: usize, vertex_count: usize) -> Self {
        Error::InvalidVertex {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
