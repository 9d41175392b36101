//! Size-based choice between 2-opt improvement and the greedy tour.
//!
//! Small and medium instances are built with [`construct`] and then
//! improved with [`improve_with`] under the configured time budget. From
//! [`SolverConfig::greedy_threshold`] points on, even one 2-opt pass is too
//! slow to be worthwhile, so the nearest-neighbor tour is returned as-is.

use std::time::Instant;

use tracing::info;

use crate::config::SolverConfig;
use crate::constructive::{construct, nearest_neighbor};
use crate::error::Result;
use crate::io::{format_solution, parse_points};
use crate::local_search::improve_with;
use crate::models::{validate_points, Point, TourSolution};

/// Solves a point set according to `config`.
///
/// `seed` is an optional starting order for the 2-opt path; the greedy-only
/// path always builds its own tour. The result is never flagged optimal.
///
/// # Errors
///
/// - [`TspError::InvalidConfig`](crate::error::TspError::InvalidConfig) if
///   `config` fails validation.
/// - [`TspError::InvalidInput`](crate::error::TspError::InvalidInput) for an
///   empty or non-finite point set or a bad seed.
///
/// # Examples
///
/// ```
/// use u_tour::config::SolverConfig;
/// use u_tour::models::Point;
/// use u_tour::solver::solve;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let sol = solve(&points, Some(&[0, 1, 2, 3]), &SolverConfig::default()).unwrap();
/// assert!((sol.length - 4.0).abs() < 1e-10);
/// assert!(!sol.optimal);
/// ```
pub fn solve(
    points: &[Point],
    seed: Option<&[usize]>,
    config: &SolverConfig,
) -> Result<TourSolution> {
    config.validate()?;
    validate_points(points)?;
    let started = Instant::now();
    let n = points.len();

    if n >= config.greedy_threshold {
        info!(
            event = "solve_start",
            n,
            strategy = "greedy",
            threshold = config.greedy_threshold,
        );
        let tour = nearest_neighbor(points);
        let length = tour.length(points);
        info!(
            event = "solve_end",
            n,
            length,
            duration_ms = started.elapsed().as_millis() as u64,
        );
        return Ok(TourSolution::new(tour, length));
    }

    info!(event = "solve_start", n, strategy = "two_opt");
    let deadline = config.time_limit().and_then(|limit| started.checked_add(limit));
    let (tour, length) = construct(points, seed)?;
    let solution = improve_with(tour, points, length, deadline, &config.improve_options())?;
    info!(
        event = "solve_end",
        n,
        length = solution.length,
        duration_ms = started.elapsed().as_millis() as u64,
    );
    Ok(solution)
}

/// Parses point records, solves them, and renders the result record.
///
/// # Errors
///
/// Any error from [`parse_points`] or [`solve`].
///
/// # Examples
///
/// ```
/// use u_tour::config::SolverConfig;
/// use u_tour::solver::solve_text;
///
/// let out = solve_text("4\n0 0\n1 1\n0 1\n1 0\n", &SolverConfig::default()).unwrap();
/// assert_eq!(out, "4.00 0\n0 2 1 3");
/// ```
pub fn solve_text(input: &str, config: &SolverConfig) -> Result<String> {
    let points = parse_points(input)?;
    let solution = solve(&points, None, config)?;
    Ok(format_solution(&solution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;

    fn grid(side: usize) -> Vec<Point> {
        (0..side * side)
            .map(|i| Point::new((i % side) as f64, (i / side) as f64))
            .collect()
    }

    #[test]
    fn test_two_opt_path_not_worse_than_greedy() {
        let points = grid(6);
        let greedy = nearest_neighbor(&points).length(points.as_slice());
        let sol = solve(&points, None, &SolverConfig::default()).expect("valid");
        assert!(sol.tour.is_valid(points.len()));
        assert!(sol.length <= greedy + 1e-9);
        assert!(!sol.optimal);
    }

    #[test]
    fn test_greedy_path_above_threshold() {
        let points = grid(5);
        let config = SolverConfig::default().with_greedy_threshold(10);
        let sol = solve(&points, Some(&[3, 2, 1, 0]), &config).expect("seed ignored");
        assert_eq!(sol.tour, nearest_neighbor(&points));
        assert!((sol.length - sol.tour.length(points.as_slice())).abs() < 1e-9);
        assert!(!sol.optimal);
    }

    #[test]
    fn test_threshold_boundary() {
        let points = grid(4);
        let n = points.len();
        let seed: Vec<usize> = (0..n).rev().collect();

        let at = SolverConfig::default().with_greedy_threshold(n);
        let sol = solve(&points, Some(seed.as_slice()), &at).expect("valid");
        assert_eq!(sol.tour, nearest_neighbor(&points));

        // One above: the 2-opt path adopts the seed; a zero budget keeps it.
        let below = SolverConfig::default()
            .with_greedy_threshold(n + 1)
            .with_time_limit_secs(0.0);
        let sol = solve(&points, Some(seed.as_slice()), &below).expect("valid");
        assert_eq!(sol.tour.order(), seed.as_slice());
    }

    #[test]
    fn test_seed_used_below_threshold() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(0.0, 5.0),
        ];
        let sol = solve(&points, Some(&[2, 1, 0]), &SolverConfig::default()).expect("valid");
        assert_eq!(sol.tour.cycle(), &[2, 1, 0, 2]);
    }

    #[test]
    fn test_zero_time_limit_returns_constructed_tour() {
        let points = grid(4);
        let config = SolverConfig::default().with_time_limit_secs(0.0);
        let sol = solve(&points, None, &config).expect("valid");
        let (tour, length) = construct(&points, None).expect("valid");
        assert_eq!(sol.tour, tour);
        assert_eq!(sol.length, length);
    }

    #[test]
    fn test_invalid_config() {
        let config = SolverConfig::default().with_time_limit_secs(-5.0);
        assert!(matches!(
            solve(&grid(2), None, &config),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            solve(&[], None, &SolverConfig::default()),
            Err(TspError::InvalidInput(_))
        ));
        assert!(matches!(
            solve_text("0\n", &SolverConfig::default()),
            Err(TspError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_solve_text_single_point() {
        let out = solve_text("1\n3 4\n", &SolverConfig::default()).expect("valid");
        assert_eq!(out, "0.00 0\n0");
    }
}
