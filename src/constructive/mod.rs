//! Constructive heuristics for building an initial tour.
//!
//! - [`construct`] — Validated entry point: adopt a seed order or build greedily
//! - [`nearest_neighbor`] — Greedy nearest-neighbor cycle from point 0, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{construct, nearest_neighbor};
