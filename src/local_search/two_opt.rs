//! Anytime 2-opt tour improvement.
//!
//! # Algorithm
//!
//! For positions `1 <= start < end <= n - 1` of the closed cycle `t`, reversing
//! `t[start..=end]` replaces edges `(t[start-1], t[start])` and
//! `(t[end], t[end+1])` with `(t[start-1], t[end])` and `(t[start], t[end+1])`:
//!
//! ```text
//! delta = d(t[start-1], t[end]) + d(t[start], t[end+1])
//!       - d(t[start-1], t[start]) - d(t[end], t[end+1])
//! ```
//!
//! Pairs are scanned by ascending `start`, then ascending `end`. The first
//! pair with `delta < -epsilon` is applied and the scan restarts from the
//! beginning (first-improvement). The search stops at a local optimum or
//! when the deadline passes; position 0 never moves.
//!
//! `epsilon` must be strictly positive: rounding can make a zero-gain move
//! look improving in both directions. The pair `(1, n - 1)` reverses the
//! whole open path, which is the same cycle traversed backwards, and is
//! never evaluated.
//!
//! # Anytime behavior
//!
//! The tour is a valid cycle between any two moves, so stopping early always
//! yields a usable result. The deadline is polled before every pass and once
//! per `start` row inside a pass.
//!
//! # Complexity
//!
//! O(1) per candidate, O(n²) per pass, O(n) per accepted move for the
//! reversal.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::distance::{DistanceMatrix, Distances};
use crate::error::{Result, TspError};
use crate::models::{validate_points, Point, Tour, TourSolution};

/// Default minimum gain for a move to be accepted.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Default largest instance for which [`improve`] precomputes a distance
/// matrix.
pub const DEFAULT_MATRIX_LIMIT: usize = 2000;

/// Tuning knobs for [`improve_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImproveOptions {
    /// A move is accepted only if it shortens the tour by more than this.
    pub epsilon: f64,
    /// Instances with at most this many points use a [`DistanceMatrix`];
    /// larger ones compute distances from coordinates.
    pub matrix_limit: usize,
}

impl Default for ImproveOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            matrix_limit: DEFAULT_MATRIX_LIMIT,
        }
    }
}

/// Improves `tour` with first-improvement 2-opt until a local optimum or
/// `deadline`.
///
/// `length` is the caller's cached length of `tour` and must match its
/// recomputed length to within `1e-6` relative; it is updated incrementally
/// and returned unchanged if no move applies. The result is never flagged
/// optimal.
///
/// # Errors
///
/// - [`TspError::InvalidTour`] if `tour` is not a closed permutation of
///   `0..points.len()`.
/// - [`TspError::InvalidInput`] for non-finite coordinates, or a `length`
///   that is not finite or disagrees with the tour.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
/// use u_tour::local_search::improve;
///
/// let square = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// // Both diagonals: 2 + 2√2
/// let crossed = Tour::from_order(vec![0, 2, 1, 3]);
/// let length = crossed.length(square.as_slice());
///
/// let sol = improve(crossed, &square, length, None).unwrap();
/// assert!((sol.length - 4.0).abs() < 1e-10);
/// assert!(!sol.optimal);
/// ```
pub fn improve(
    tour: Tour,
    points: &[Point],
    length: f64,
    deadline: Option<Instant>,
) -> Result<TourSolution> {
    improve_with(tour, points, length, deadline, &ImproveOptions::default())
}

/// [`improve`] with explicit [`ImproveOptions`].
///
/// # Errors
///
/// As [`improve`], plus [`TspError::InvalidConfig`] if `options.epsilon` is
/// not a positive finite number.
pub fn improve_with(
    tour: Tour,
    points: &[Point],
    length: f64,
    deadline: Option<Instant>,
    options: &ImproveOptions,
) -> Result<TourSolution> {
    tour.validate(points.len())?;
    validate_points(points)?;
    if !length.is_finite() {
        return Err(TspError::InvalidInput(format!(
            "tour length {length} is not finite"
        )));
    }
    let actual = tour.length(points);
    if (length - actual).abs() > 1e-6 * actual.max(1.0) {
        return Err(TspError::InvalidInput(format!(
            "cached length {length} does not match tour length {actual}"
        )));
    }
    check_epsilon(options.epsilon)?;

    let n = points.len();
    if n <= options.matrix_limit {
        let matrix = DistanceMatrix::from_points(points);
        let mut search = TwoOpt::new(tour, length, &matrix)?.with_epsilon(options.epsilon)?;
        search.run(deadline);
        Ok(search.into_solution())
    } else {
        let mut search = TwoOpt::new(tour, length, points)?.with_epsilon(options.epsilon)?;
        search.run(deadline);
        Ok(search.into_solution())
    }
}

/// Checks that a move tolerance is a positive finite number.
///
/// # Errors
///
/// [`TspError::InvalidConfig`] otherwise.
pub(crate) fn check_epsilon(epsilon: f64) -> Result<()> {
    if epsilon.is_finite() && epsilon > 0.0 {
        Ok(())
    } else {
        Err(TspError::InvalidConfig(format!(
            "epsilon must be a positive finite number, got {epsilon}"
        )))
    }
}

/// Outcome of one enumeration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Improved,
    LocalOptimum,
    Expired,
}

/// 2-opt search state: one tour, its cached length, and the distances it is
/// measured with.
///
/// The search owns its tour exclusively; [`TwoOpt::tour`] and
/// [`TwoOpt::length`] can be read between steps.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
/// use u_tour::local_search::TwoOpt;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let tour = Tour::from_order(vec![0, 2, 3, 1]);
/// let length = tour.length(points.as_slice());
///
/// let mut search = TwoOpt::new(tour, length, points.as_slice()).unwrap();
/// assert!(search.tour().is_valid(4));
/// assert!(search.step());
/// assert_eq!(search.tour().cycle(), &[0, 3, 2, 1, 0]);
/// assert!(!search.step());
/// ```
#[derive(Debug)]
pub struct TwoOpt<'a, D: Distances + ?Sized> {
    tour: Tour,
    length: f64,
    distances: &'a D,
    epsilon: f64,
    moves: u64,
    passes: u64,
}

impl<'a, D: Distances + ?Sized> TwoOpt<'a, D> {
    /// Starts a search from `tour` with cached `length`.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidTour`] if `tour` is not a closed permutation of
    /// `0..distances.size()`.
    pub fn new(tour: Tour, length: f64, distances: &'a D) -> Result<Self> {
        tour.validate(distances.size())?;
        Ok(Self {
            tour,
            length,
            distances,
            epsilon: DEFAULT_EPSILON,
            moves: 0,
            passes: 0,
        })
    }

    /// Sets the minimum gain for accepting a move.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfig`] unless `epsilon` is positive and finite.
    pub fn with_epsilon(mut self, epsilon: f64) -> Result<Self> {
        check_epsilon(epsilon)?;
        self.epsilon = epsilon;
        Ok(self)
    }

    /// Current tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Cached length of the current tour.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of moves applied so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Number of enumeration passes started so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Length change from reversing positions `start..=end`.
    ///
    /// Requires `1 <= start < end < n` where `n` is the number of points.
    pub fn delta(&self, start: usize, end: usize) -> f64 {
        let c = self.tour.cycle();
        let (prev, first) = (c[start - 1], c[start]);
        let (last, next) = (c[end], c[end + 1]);
        let d = self.distances;
        d.dist(prev, last) + d.dist(first, next) - d.dist(prev, first) - d.dist(last, next)
    }

    /// Applies the first improving move, if any.
    ///
    /// Returns `false` when the tour is a local optimum.
    pub fn step(&mut self) -> bool {
        self.pass(None) == Pass::Improved
    }

    /// Applies moves until no improving move remains or `deadline` passes.
    pub fn run(&mut self, deadline: Option<Instant>) {
        let started = Instant::now();
        let n = self.tour.num_points();
        info!(
            event = "improvement_start",
            n,
            length = self.length,
            deadline_ms = deadline.map(|d| d.saturating_duration_since(started).as_millis() as u64),
        );

        // With three or fewer points every reversal yields the same cycle.
        if n > 3 {
            loop {
                if expired(deadline) {
                    debug!(event = "deadline_reached", passes = self.passes, moves = self.moves);
                    break;
                }
                match self.pass(deadline) {
                    Pass::Improved => {}
                    Pass::LocalOptimum => break,
                    Pass::Expired => {
                        debug!(event = "deadline_reached", passes = self.passes, moves = self.moves);
                        break;
                    }
                }
            }
        }

        info!(
            event = "improvement_end",
            n,
            length = self.length,
            moves = self.moves,
            passes = self.passes,
            duration_ms = started.elapsed().as_millis() as u64,
        );
    }

    /// Consumes the search and returns its tour as a heuristic solution.
    pub fn into_solution(self) -> TourSolution {
        TourSolution::new(self.tour, self.length)
    }

    fn pass(&mut self, deadline: Option<Instant>) -> Pass {
        let n = self.tour.num_points();
        if n <= 3 {
            return Pass::LocalOptimum;
        }
        self.passes += 1;

        for start in 1..n - 1 {
            if expired(deadline) {
                return Pass::Expired;
            }
            // (1, n - 1) only flips the direction of travel.
            let end_limit = if start == 1 { n - 1 } else { n };
            for end in start + 1..end_limit {
                let delta = self.delta(start, end);
                if delta < -self.epsilon {
                    self.apply(start, end, delta);
                    return Pass::Improved;
                }
            }
        }
        Pass::LocalOptimum
    }

    fn apply(&mut self, start: usize, end: usize, delta: f64) {
        self.tour.reverse(start, end);
        self.length += delta;
        self.moves += 1;
        trace!(
            event = "move",
            step = self.moves,
            start,
            end,
            delta,
            length = self.length,
        );
    }
}

fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}
