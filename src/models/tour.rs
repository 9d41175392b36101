//! Closed tour type.

use serde::{Deserialize, Serialize};

use crate::distance::Distances;
use crate::error::{Result, TspError};

/// A closed cycle over point indices.
///
/// Stored as `n + 1` indices where the last entry repeats the first. A tour
/// is valid for `n` points when its first `n` entries are a permutation of
/// `0..n`. Construction does not validate; use [`Tour::validate`] or
/// [`Tour::is_valid`] against the point count.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let tour = Tour::from_order(vec![0, 2, 1]);
/// assert_eq!(tour.cycle(), &[0, 2, 1, 0]);
/// assert_eq!(tour.order(), &[0, 2, 1]);
/// assert!(tour.is_valid(3));
/// assert!(!tour.is_valid(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    cycle: Vec<usize>,
}

impl Tour {
    /// Creates a tour from an open visiting order, closing it by repeating
    /// the first index.
    pub fn from_order(mut order: Vec<usize>) -> Self {
        if let Some(&first) = order.first() {
            order.push(first);
        }
        Self { cycle: order }
    }

    /// Wraps an already-closed index sequence as-is.
    pub fn from_cycle(cycle: Vec<usize>) -> Self {
        Self { cycle }
    }

    /// The closed sequence, `n + 1` entries long.
    pub fn cycle(&self) -> &[usize] {
        &self.cycle
    }

    /// The visiting order without the closing repeat.
    pub fn order(&self) -> &[usize] {
        match self.cycle.split_last() {
            Some((_, open)) => open,
            None => &[],
        }
    }

    /// Number of distinct visits (`cycle().len() - 1`).
    pub fn num_points(&self) -> usize {
        self.cycle.len().saturating_sub(1)
    }

    /// Consumes the tour and returns the closed sequence.
    pub fn into_cycle(self) -> Vec<usize> {
        self.cycle
    }

    /// Returns `true` if this is a closed permutation of `0..n`.
    pub fn is_valid(&self, n: usize) -> bool {
        self.validate(n).is_ok()
    }

    /// Checks that this is a closed permutation of `0..n`.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidTour`] naming the first violation found.
    pub fn validate(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(TspError::InvalidTour("no points to visit".into()));
        }
        if self.cycle.len() != n + 1 {
            return Err(TspError::InvalidTour(format!(
                "expected {} entries for {} points, got {}",
                n + 1,
                n,
                self.cycle.len()
            )));
        }
        if self.cycle[0] != self.cycle[n] {
            return Err(TspError::InvalidTour(format!(
                "cycle is not closed: starts at {} but ends at {}",
                self.cycle[0], self.cycle[n]
            )));
        }
        let mut seen = vec![false; n];
        for &idx in self.order() {
            if idx >= n {
                return Err(TspError::InvalidTour(format!(
                    "index {idx} out of range for {n} points"
                )));
            }
            if seen[idx] {
                return Err(TspError::InvalidTour(format!("index {idx} visited twice")));
            }
            seen[idx] = true;
        }
        Ok(())
    }

    /// Total length: sum of distances between consecutive entries.
    pub fn length<D: Distances + ?Sized>(&self, distances: &D) -> f64 {
        self.cycle
            .windows(2)
            .map(|w| distances.dist(w[0], w[1]))
            .sum()
    }

    /// Reverses the inclusive position range `start..=end` in place.
    pub(crate) fn reverse(&mut self, start: usize, end: usize) {
        self.cycle[start..=end].reverse();
    }
}
