//! Ant Colony Optimization (ACO).
//!
//! A population-based metaheuristic in which each "ant" stochastically
//! constructs a complete candidate assignment guided by a shared pheromone
//! field. Good solutions reinforce the cells they used; evaporation decays
//! stale desirability so the colony keeps exploring.
//!
//! Construction deliberately ignores hard constraints — infeasibility is
//! penalized by the fitness evaluator rather than prevented structurally,
//! which keeps the sampling procedure trivial and the search space fully
//! connected.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"

mod config;
mod construction;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use construction::build_assignment;
pub use pheromone::PheromoneField;
pub use runner::{AcoResult, AcoRunner};
