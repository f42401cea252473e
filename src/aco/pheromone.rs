//! Pheromone state.
//!
//! The optimizer's learned state: one non-negative desirability weight per
//! (worker, slot, position) triple, stored as a flattened tensor. The field
//! starts as a uniform prior, decays multiplicatively each generation
//! (evaporation), and is reinforced additively by the generation's
//! solutions in proportion to their normalized fitness.
//!
//! Invariant: every cell stays finite and `>= 0` after any sequence of
//! updates.

use serde::{Deserialize, Serialize};

use crate::model::Solution;

/// Dense (workers × slots × positions) pheromone tensor.
///
/// Each (worker, slot) pair owns an independent desirability distribution
/// over positions. Serializable for checkpointing; deserializing restores
/// the exact sampling distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PheromoneField {
    workers: usize,
    slots: usize,
    positions: usize,
    values: Vec<f64>,
}

impl PheromoneField {
    /// Creates a field with every cell at `1.0` — a uniform, unbiased prior.
    pub fn new(workers: usize, slots: usize, positions: usize) -> Self {
        Self {
            workers,
            slots,
            positions,
            values: vec![1.0; workers * slots * positions],
        }
    }

    /// Number of worker rows.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Number of slot columns.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Number of positions per (worker, slot) distribution.
    #[inline]
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// The pheromone value at a single cell.
    #[inline]
    pub fn get(&self, worker: usize, slot: usize, position: usize) -> f64 {
        self.values[(worker * self.slots + slot) * self.positions + position]
    }

    /// The desirability vector of one (worker, slot) pair.
    #[inline]
    pub fn slot_weights(&self, worker: usize, slot: usize) -> &[f64] {
        let start = (worker * self.slots + slot) * self.positions;
        &self.values[start..start + self.positions]
    }

    /// Multiplies every cell by `1 - rate`.
    ///
    /// `rate` is clamped to `[0, 1]`, so decay can never produce a negative
    /// cell. `rate = 0` leaves the field unchanged; `rate = 1` zeroes it,
    /// after which construction falls back to uniform sampling until the
    /// next reinforcement.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate.clamp(0.0, 1.0);
        for value in &mut self.values {
            *value *= keep;
        }
    }

    /// Deposits pheromone for each solution of a generation.
    ///
    /// Fitness values are min–max normalized across the generation; each
    /// solution then adds `intensity * normalized` to every (worker, slot,
    /// position) cell its assignment occupies. When the whole generation
    /// scores equal, every solution deposits the full `intensity` so the
    /// field still evolves instead of receiving a zero update.
    pub fn reinforce(&mut self, solutions: &[Solution], intensity: f64) {
        let Some(min) = solutions.iter().map(|s| s.fitness).min() else {
            return;
        };
        let max = solutions
            .iter()
            .map(|s| s.fitness)
            .max()
            .expect("non-empty solutions");
        let range = max - min;

        for solution in solutions {
            let normalized = if range == 0 {
                1.0
            } else {
                (solution.fitness - min) as f64 / range as f64
            };
            let deposit = intensity * normalized;
            if deposit == 0.0 {
                continue;
            }
            for (worker, slot, position) in solution.assignment.occupied() {
                self.values[(worker * self.slots + slot) * self.positions + position] += deposit;
            }
        }
    }
}
