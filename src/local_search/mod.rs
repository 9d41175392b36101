//! Local search for improving a tour.
//!
//! - [`two_opt`] — Time-bounded first-improvement 2-opt with an incrementally
//!   maintained length

mod two_opt;

pub(crate) use two_opt::check_epsilon;

pub use two_opt::{
    improve, improve_with, ImproveOptions, TwoOpt, DEFAULT_EPSILON, DEFAULT_MATRIX_LIMIT,
};
