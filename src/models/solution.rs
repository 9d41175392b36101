//! Improvement result type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Tour;

/// A tour together with its length and optimality flag.
///
/// The heuristic paths in this crate never prove optimality, so `optimal`
/// is `false` for every solution they produce.
///
/// The [`Display`](fmt::Display) form is the two-line result record: length
/// with two decimals and the flag as `0`/`1`, then the open visiting order.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Tour, TourSolution};
///
/// let sol = TourSolution::new(Tour::from_order(vec![0, 2, 1]), 3.14159);
/// assert!(!sol.optimal);
/// assert_eq!(sol.to_string(), "3.14 0\n0 2 1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSolution {
    /// The closed tour.
    pub tour: Tour,
    /// Its total Euclidean length.
    pub length: f64,
    /// Whether the tour is proven optimal.
    pub optimal: bool,
}

impl TourSolution {
    /// Creates a heuristic (non-optimal) solution.
    pub fn new(tour: Tour, length: f64) -> Self {
        Self {
            tour,
            length,
            optimal: false,
        }
    }
}

impl fmt::Display for TourSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:.2} {}", self.length, u8::from(self.optimal))?;
        let mut first = true;
        for idx in self.tour.order() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{idx}")?;
            first = false;
        }
        Ok(())
    }
}
