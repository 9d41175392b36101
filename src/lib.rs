//! # u-tour
//!
//! Euclidean traveling salesman tours: greedy construction and anytime
//! 2-opt improvement under a wall-clock deadline.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, TourSolution)
//! - [`distance`] — Distance lookup by point index
//! - [`constructive`] — Nearest-neighbor construction and seed adoption
//! - [`local_search`] — First-improvement 2-opt with a deadline
//! - [`solver`] — Size-based policy choosing 2-opt or greedy-only
//! - [`config`] — Solver configuration
//! - [`io`] — Point record parsing and result formatting
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use u_tour::constructive::construct;
//! use u_tour::local_search::improve;
//! use u_tour::models::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ];
//! let (tour, length) = construct(&points, Some(&[0, 2, 1, 3])).unwrap();
//! let deadline = Instant::now() + Duration::from_secs(5);
//! let sol = improve(tour, &points, length, Some(deadline)).unwrap();
//! assert!((sol.length - 4.0).abs() < 1e-10);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Result, TspError};
