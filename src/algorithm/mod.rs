pub mod traits;
pub mod bfs;
pub mod sap;

pub use traits::ReachabilityAlgorithm;
pub use bfs::{DistanceMap, MultiSourceBfs};
pub use sap::{AncestralPath, Sap};
