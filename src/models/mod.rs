//! Domain model types for Euclidean tours.
//!
//! Points in the plane, closed tours over their indices, and the result
//! record produced by the solvers.

mod point;
mod solution;
mod tour;

pub use point::{validate_points, Point};
pub use solution::TourSolution;
pub use tour::Tour;
