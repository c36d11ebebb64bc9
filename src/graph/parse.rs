//! Edge-list text format.
//!
//! The input is a stream of whitespace-separated integers: the vertex count `V`,
//! the edge count `E`, then `E` pairs `from to`. Line breaks carry no meaning.

use std::io::Read;
use std::str::FromStr;

use crate::graph::directed::Digraph;
use crate::graph::traits::MutableGraph;
use crate::{Error, Result};

/// Largest vertex count accepted from edge-list text
pub const MAX_VERTICES: usize = 1 << 24;

impl Digraph {
    /// Reads a graph in edge-list format from any reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }
}

impl FromStr for Digraph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();

        let vertices = next_count(&mut tokens, "number of vertices")?;
        if vertices > MAX_VERTICES {
            return Err(Error::Parse(format!(
                "number of vertices {} exceeds the limit of {}",
                vertices, MAX_VERTICES
            )));
        }
        let edges = next_count(&mut tokens, "number of edges")?;

        let mut graph = Digraph::try_with_capacity(vertices)?;
        for i in 0..edges {
            let from = next_count(&mut tokens, &format!("tail of edge {}", i))?;
            let to = next_count(&mut tokens, &format!("head of edge {}", i))?;
            if !graph.add_edge(from, to) {
                return Err(Error::InvalidEdge(from, to));
            }
        }

        if let Some(extra) = tokens.next() {
            log::warn!("Ignoring trailing input after {} edges starting at {:?}", edges, extra);
        }

        Ok(graph)
    }
}

fn next_count<'a, I>(tokens: &mut I, what: &str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Error::Parse(format!("unexpected end of input, expected {}", what)))?;

    let value: i64 = token
        .parse()
        .map_err(|_| Error::Parse(format!("expected integer for {}, found {:?}", what, token)))?;

    usize::try_from(value)
        .map_err(|_| Error::Parse(format!("{} must be non-negative, found {}", what, value)))
}
