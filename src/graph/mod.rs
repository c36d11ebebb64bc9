pub mod traits;
pub mod directed;
pub mod generators;
pub mod parse;

pub use traits::{Graph, MutableGraph};
pub use directed::Digraph;
