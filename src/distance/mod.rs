//! Distance lookup between point indices.
//!
//! [`Distances`] abstracts over a precomputed [`DistanceMatrix`] and on-the-fly
//! Euclidean distances read straight from a point slice.

mod matrix;

pub use matrix::DistanceMatrix;

use crate::models::Point;

/// Symmetric distance lookup by point index.
pub trait Distances {
    /// Distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn dist(&self, from: usize, to: usize) -> f64;

    /// Number of locations.
    fn size(&self) -> usize;

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Only a strictly smaller distance replaces the current best, so among
    /// equidistant candidates the first one yielded wins.
    fn nearest<I>(&self, from: usize, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut best: Option<(usize, f64)> = None;
        for c in candidates {
            let d = self.dist(from, c);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}

impl Distances for [Point] {
    fn dist(&self, from: usize, to: usize) -> f64 {
        self[from].distance_to(&self[to])
    }

    fn size(&self) -> usize {
        self.len()
    }
}
