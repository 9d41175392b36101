//! Planar point type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// A location in the plane.
///
/// Points are identified by their index in the input list, so two points may
/// share the same coordinates.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Checks that a point set is non-empty and every coordinate is finite.
///
/// # Errors
///
/// [`TspError::InvalidInput`] for an empty set or the first non-finite point.
pub fn validate_points(points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(TspError::InvalidInput("empty point set".into()));
    }
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(TspError::InvalidInput(format!(
            "point {i} has a non-finite coordinate"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
    }

    #[test]
    fn test_point_from_tuple() {
        let p: Point = (1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5, -2.0));
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_coincident_points() {
        let a = Point::new(7.0, 7.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_validate_points() {
        assert!(validate_points(&[Point::new(0.0, 0.0)]).is_ok());
        assert_eq!(
            validate_points(&[]),
            Err(TspError::InvalidInput("empty point set".into()))
        );
        let bad = [Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        assert_eq!(
            validate_points(&bad),
            Err(TspError::InvalidInput(
                "point 1 has a non-finite coordinate".into()
            ))
        );
    }
}
