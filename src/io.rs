//! Point records in, result records out.
//!
//! The input format is line oriented: the first line holds the point count
//! `n`, each of the next `n` lines one `x y` pair. The output format is the
//! [`Display`](std::fmt::Display) form of [`TourSolution`].

use crate::error::{Result, TspError};
use crate::models::{Point, TourSolution};

/// Parses a point set from its line-oriented text form.
///
/// Blank lines and anything after the `n` point lines are ignored; fields
/// beyond the first two on a point line are ignored too.
///
/// # Errors
///
/// [`TspError::InvalidInput`] naming the 1-based line for a missing or
/// unparsable count, a missing point line, a line with fewer than two
/// numbers, or a non-finite coordinate.
///
/// # Examples
///
/// ```
/// use u_tour::io::parse_points;
/// use u_tour::models::Point;
///
/// let points = parse_points("3\n0 0\n0 1\n1.5 2\n").unwrap();
/// assert_eq!(points, vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.5, 2.0),
/// ]);
/// ```
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count) = lines
        .next()
        .ok_or_else(|| TspError::InvalidInput("missing point count".into()))?;
    let n: usize = count.parse().map_err(|e| {
        TspError::InvalidInput(format!("line {count_line}: invalid point count {count:?}: {e}"))
    })?;

    let mut points = Vec::with_capacity(n);
    for k in 0..n {
        let (line_no, line) = lines.next().ok_or_else(|| {
            TspError::InvalidInput(format!("expected {n} points, found {k}"))
        })?;
        let mut fields = line.split_whitespace();
        let mut coord = |axis: &str| -> Result<f64> {
            let field = fields.next().ok_or_else(|| {
                TspError::InvalidInput(format!("line {line_no}: missing {axis} coordinate"))
            })?;
            let value: f64 = field.parse().map_err(|e| {
                TspError::InvalidInput(format!("line {line_no}: invalid {axis} {field:?}: {e}"))
            })?;
            if !value.is_finite() {
                return Err(TspError::InvalidInput(format!(
                    "line {line_no}: {axis} coordinate is not finite"
                )));
            }
            Ok(value)
        };
        let x = coord("x")?;
        let y = coord("y")?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Renders a solution as its two-line result record.
pub fn format_solution(solution: &TourSolution) -> String {
    solution.to_string()
}
