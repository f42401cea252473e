//! Stochastic assignment construction.
//!
//! One "ant" builds a complete assignment by sampling, independently for
//! every (worker, slot) pair, a position from the discrete distribution
//! proportional to that pair's pheromone vector. Construction never
//! enforces hard constraints — infeasible placements are discovered and
//! penalized by the evaluator, which keeps construction trivially simple
//! and the search space fully connected.

use rand::Rng;

use super::pheromone::PheromoneField;
use crate::model::Assignment;

/// Builds one candidate assignment from the current pheromone field.
///
/// The random source is injected so runs can be replayed deterministically
/// from a seed.
pub fn build_assignment<R: Rng>(field: &PheromoneField, rng: &mut R) -> Assignment {
    let mut assignment = Assignment::new(field.workers(), field.slots());
    for worker in 0..field.workers() {
        for slot in 0..field.slots() {
            let position = sample_position(field.slot_weights(worker, slot), rng);
            assignment.set(worker, slot, Some(position));
        }
    }
    assignment
}

/// Roulette-samples an index proportionally to `weights`.
///
/// When the vector sums to a non-positive or non-finite value (all cells
/// evaporated to zero, underflow) the draw falls back to a uniform choice
/// over all positions instead of failing.
pub(crate) fn sample_position<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..weights.len());
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    weights.len() - 1 // floating-point fallback
}
