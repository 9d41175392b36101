//! Nearest-neighbor tour construction.
//!
//! Builds a cycle greedily: starting from point 0, always move to the
//! nearest unvisited point, then return to point 0.
//!
//! # Tie-breaking
//!
//! Unvisited points are scanned in ascending index order and only a strictly
//! shorter distance replaces the current choice, so among equidistant
//! candidates the lowest index is taken. Construction is fully deterministic.
//!
//! # Complexity
//!
//! O(n²) time, O(n) extra memory: distances are computed from coordinates,
//! so this stays usable for instances too large for a distance matrix.

use std::time::Instant;

use tracing::info;

use crate::distance::Distances;
use crate::error::{Result, TspError};
use crate::models::{validate_points, Point, Tour};

/// Builds the initial tour and its length.
///
/// With `seed`, the given visiting order is adopted as-is (closed by
/// repeating its first entry). Without it, the tour is built by
/// [`nearest_neighbor`].
///
/// # Errors
///
/// [`TspError::InvalidInput`] if `points` is empty, holds a non-finite
/// coordinate, or `seed` is not a permutation of `0..points.len()`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::constructive::construct;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ];
/// let (tour, length) = construct(&points, None).unwrap();
/// assert_eq!(tour.cycle(), &[0, 2, 3, 1, 0]);
/// assert!((length - 6.0).abs() < 1e-10);
///
/// let (seeded, _) = construct(&points, Some(&[1, 0, 3, 2])).unwrap();
/// assert_eq!(seeded.cycle(), &[1, 0, 3, 2, 1]);
/// ```
pub fn construct(points: &[Point], seed: Option<&[usize]>) -> Result<(Tour, f64)> {
    validate_points(points)?;
    let started = Instant::now();

    let tour = match seed {
        Some(order) => {
            let tour = Tour::from_order(order.to_vec());
            tour.validate(points.len()).map_err(|e| match e {
                TspError::InvalidTour(msg) => {
                    TspError::InvalidInput(format!("seed is not a permutation: {msg}"))
                }
                other => other,
            })?;
            tour
        }
        None => nearest_neighbor(points),
    };
    let length = tour.length(points);

    info!(
        event = "construction_end",
        n = points.len(),
        seeded = seed.is_some(),
        length,
        duration_ms = started.elapsed().as_millis() as u64,
    );
    Ok((tour, length))
}

/// Builds a closed nearest-neighbor tour starting and ending at point 0.
///
/// Returns an empty tour for an empty point set; callers wanting that
/// rejected should go through [`construct`].
pub fn nearest_neighbor(points: &[Point]) -> Tour {
    let n = points.len();
    if n == 0 {
        return Tour::from_order(Vec::new());
    }

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut order = Vec::with_capacity(n + 1);
    order.push(0);
    let mut current = 0;

    while order.len() < n {
        let next = points.nearest(current, (0..n).filter(|&i| !visited[i]));
        match next {
            Some(next) => {
                visited[next] = true;
                order.push(next);
                current = next;
            }
            None => break,
        }
    }

    Tour::from_order(order)
}
