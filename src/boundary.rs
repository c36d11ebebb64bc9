//! Conversions for callers that speak signed vertex IDs and `-1` sentinels
//! (C, Python, JSON, the command line).

use crate::{Error, Result};

/// Value reported in place of a length or ancestor when none exists
pub const NOT_FOUND: i64 = -1;

/// Converts a signed vertex ID for a pair query.
/// Negative IDs are rejected as invalid vertices; the upper bound is checked by the query.
pub fn vertex(id: i64, vertex_count: usize) -> Result<usize> {
    usize::try_from(id)
        .ok()
        .filter(|&v| v < vertex_count)
        .ok_or(Error::InvalidVertex {
            vertex: id,
            vertex_count,
        })
}

/// Converts a set of signed, possibly missing vertex IDs for a set query.
/// Missing, negative and out-of-range members are all invalid arguments.
pub fn vertex_set<I>(ids: I, vertex_count: usize) -> Result<Vec<usize>>
where
    I: IntoIterator<Item = Option<i64>>,
{
    let vertices = ids
        .into_iter()
        .map(|id| match id {
            None => Err(Error::InvalidArgument("vertex set contains null".to_string())),
            Some(id) => usize::try_from(id)
                .ok()
                .filter(|&v| v < vertex_count)
                .ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "vertex set contains {}, outside 0..{}",
                        id, vertex_count
                    ))
                }),
        })
        .collect::<Result<Vec<usize>>>()?;

    if vertices.is_empty() {
        return Err(Error::InvalidArgument("vertex set is empty".to_string()));
    }
    Ok(vertices)
}

/// Renders an optional query result with the `-1` sentinel
pub fn to_sentinel(value: Option<usize>) -> i64 {
    value
        .and_then(|v| i64::try_from(v).ok())
        .unwrap_or(NOT_FOUND)
}
