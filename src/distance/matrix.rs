//! Dense distance matrix.

use super::Distances;
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Trades `n²` memory for a single indexed load per lookup, which pays off
/// in the 2-opt inner loop where every pair is evaluated repeatedly.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::{DistanceMatrix, Distances};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.dist(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix from point coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }
}

impl Distances for DistanceMatrix {
    #[inline]
    fn dist(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 3);
        assert!((dm.dist(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.dist(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.dist(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points());
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(dm.dist(i, j), dm.dist(j, i));
            }
        }
    }

    #[test]
    fn test_matches_points() {
        let pts = sample_points();
        let dm = DistanceMatrix::from_points(&pts);
        for i in 0..3 {
            for j in 0..3 {
                assert!((dm.dist(i, j) - pts[..].dist(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_nearest() {
        let dm = DistanceMatrix::from_points(&sample_points());
        // From (0,0): (3,4) is 5 away, (0,8) is 8 away
        assert_eq!(dm.nearest(0, [1, 2]), Some(1));
        assert_eq!(dm.nearest(0, [2]), Some(2));
        assert_eq!(dm.nearest(0, std::iter::empty()), None);
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_points(&[]);
        assert_eq!(dm.size(), 0);
    }
}
