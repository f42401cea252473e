//! Shift rostering via ant colony optimization.
//!
//! Assigns a roster of workers to a catalog of physical positions across
//! the hourly slots of a workday, subject to per-worker restrictions and
//! diversity/consistency rules. One optimization run produces one day's
//! schedule; the caller loops over its working-day calendar with a fresh
//! run per date.
//!
//! - **`model`**: The immutable per-day problem — workers, positions,
//!   restriction mapping — plus the dense assignment matrix candidate
//!   solutions are built on.
//! - **`fitness`**: Pure integer scoring of an assignment: restriction
//!   violations, consecutive-family repetition vs. diversity, and the
//!   one-classifier-group-per-day rule, all with tunable weights.
//! - **`aco`**: The optimizer — pheromone field, stochastic construction,
//!   and the generation loop with evaporation and reinforcement.
//! - **`roster`**: The output table: labeled, ordered rows ready for the
//!   caller's storage collaborators.
//!
//! # Example
//!
//! ```
//! use u_roster::aco::{AcoConfig, AcoRunner};
//! use u_roster::fitness::FitnessWeights;
//! use u_roster::model::{Position, RestrictionMap, RosterProblem, Worker};
//!
//! let problem = RosterProblem::new(
//!     vec![Worker::new(1, "Anna").with_shift("morning")],
//!     vec![
//!         Position::new(1, "Ramp A", 1, "ramp"),
//!         Position::new(2, "Desk", 1, "office"),
//!     ],
//!     &RestrictionMap::new(),
//!     8,
//! )
//! .unwrap();
//!
//! let config = AcoConfig::default()
//!     .with_ants(20)
//!     .with_generations(10)
//!     .with_seed(42);
//! let result = AcoRunner::run(&problem, &FitnessWeights::default(), &config);
//!
//! assert_eq!(result.fitness_history.len(), 10);
//! ```
//!
//! # Architecture
//!
//! The optimizer core is deliberately free of I/O: loading worker and
//! position tables, selecting working days, and writing result tables are
//! external collaborators. Scoring is pure and the pheromone field is only
//! written between generations, so each generation's colony can be
//! evaluated in parallel.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"

pub mod aco;
pub mod fitness;
pub mod model;
pub mod roster;
