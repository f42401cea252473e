//! Candidate solution representation.
//!
//! An [`Assignment`] is a dense worker × slot matrix where each cell holds
//! either a position index into the problem's catalog or `None` for an
//! unassigned slot. One assignment is what a single ant constructs; paired
//! with its fitness it becomes a [`Solution`].

use serde::{Deserialize, Serialize};

/// A dense worker × slot assignment matrix.
///
/// Cells store **position indices** (row positions in the problem's
/// catalog), not position ids. `None` marks a slot left unassigned.
/// Dimensions are fixed at construction and match the problem model for
/// the lifetime of one optimization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    workers: usize,
    slots: usize,
    cells: Vec<Option<usize>>,
}

/// An assignment together with its fitness. Higher fitness is better;
/// fitness may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// The candidate assignment.
    pub assignment: Assignment,
    /// Fitness of the assignment under the problem's weights.
    pub fitness: i64,
}

impl Assignment {
    /// Creates an all-unassigned matrix of the given dimensions.
    pub fn new(workers: usize, slots: usize) -> Self {
        Self {
            workers,
            slots,
            cells: vec![None; workers * slots],
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

    /// Returns the position index occupied at `(worker, slot)`, if any.
    #[inline]
    pub fn get(&self, worker: usize, slot: usize) -> Option<usize> {
        self.cells[worker * self.slots + slot]
    }

    /// Sets the cell at `(worker, slot)`.
    #[inline]
    pub fn set(&mut self, worker: usize, slot: usize, position: Option<usize>) {
        self.cells[worker * self.slots + slot] = position;
    }

    /// Iterates all occupied cells as `(worker, slot, position)` triples,
    /// in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|pos| (i / self.slots, i % self.slots, pos))
        })
    }
}

impl Solution {
    /// Pairs an assignment with its fitness.
    pub fn new(assignment: Assignment, fitness: i64) -> Self {
        Self { assignment, fitness }
    }
}
