//! Domain model for one day of rostering.
//!
//! Holds the immutable inputs of a single optimization run — the worker
//! roster, the position catalog, and the per-worker restriction mapping —
//! plus the dense [`Assignment`] matrix that candidate solutions are built
//! on. Everything here is constructed once per day and read-only during
//! the run.

mod assignment;
mod problem;
mod types;

pub use assignment::{Assignment, Solution};
pub use problem::{ModelError, RestrictionMap, RosterProblem};
pub use types::{Position, Worker};
