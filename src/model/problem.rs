//! The immutable per-day problem model.
//!
//! [`RosterProblem`] validates its inputs once and precomputes the
//! integer-indexed lookup tables the evaluator and the optimizer read on
//! every ant: interned family ids, classifier groups, and a per-worker
//! blocked-position table derived from the restriction mapping.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Position, Worker};

/// Mapping from worker id to the set of restriction tags that worker must
/// not be placed into.
pub type RestrictionMap = HashMap<u32, HashSet<String>>;

/// Structural input errors. Raised at construction, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Zero workers, positions, or slots — no valid schedule can exist.
    #[error("degenerate problem: {workers} workers, {positions} positions, {slots} slots (all must be at least 1)")]
    DegenerateProblem {
        /// Number of workers supplied.
        workers: usize,
        /// Number of positions supplied.
        positions: usize,
        /// Number of hourly slots supplied.
        slots: usize,
    },

    /// Two workers share an id.
    #[error("duplicate worker id: {0}")]
    DuplicateWorkerId(u32),

    /// Two positions share an id.
    #[error("duplicate position id: {0}")]
    DuplicatePositionId(u32),
}

/// The static inputs of one day's optimization run.
///
/// Constructed from the worker roster, the position catalog, and the
/// restriction mapping. Immutable thereafter; the optimizer and evaluator
/// only read it, so it can be shared freely across threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterProblem {
    workers: Vec<Worker>,
    positions: Vec<Position>,
    slots: usize,
    /// Interned family id per position index.
    family_ids: Vec<u32>,
    /// `blocked[worker_index][position_index]` — whether the position's
    /// restriction tag is in the worker's restriction set.
    blocked: Vec<Vec<bool>>,
}

impl RosterProblem {
    /// Builds and validates the problem model.
    ///
    /// Fails with [`ModelError::DegenerateProblem`] when `workers`,
    /// `positions`, or `slots` is empty/zero, and with a duplicate-id error
    /// when ids collide within either table.
    pub fn new(
        workers: Vec<Worker>,
        positions: Vec<Position>,
        restrictions: &RestrictionMap,
        slots: usize,
    ) -> Result<Self, ModelError> {
        if workers.is_empty() || positions.is_empty() || slots == 0 {
            return Err(ModelError::DegenerateProblem {
                workers: workers.len(),
                positions: positions.len(),
                slots,
            });
        }

        let mut worker_ids = HashSet::new();
        for w in &workers {
            if !worker_ids.insert(w.id) {
                return Err(ModelError::DuplicateWorkerId(w.id));
            }
        }
        let mut position_ids = HashSet::new();
        for p in &positions {
            if !position_ids.insert(p.id) {
                return Err(ModelError::DuplicatePositionId(p.id));
            }
        }

        // Intern family tags so the evaluator compares integers, not strings.
        let mut family_index: HashMap<&str, u32> = HashMap::new();
        let mut family_ids = Vec::with_capacity(positions.len());
        for p in &positions {
            let next = family_index.len() as u32;
            let id = *family_index.entry(p.family.as_str()).or_insert(next);
            family_ids.push(id);
        }

        let empty = HashSet::new();
        let blocked = workers
            .iter()
            .map(|w| {
                let tags = restrictions.get(&w.id).unwrap_or(&empty);
                positions
                    .iter()
                    .map(|p| {
                        p.restriction_tag
                            .as_ref()
                            .is_some_and(|tag| tags.contains(tag))
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            workers,
            positions,
            slots,
            family_ids,
            blocked,
        })
    }

    /// Number of workers.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Number of positions in the catalog.
    #[inline]
    pub fn num_positions(&self) -> usize {
        self.positions.len()
    }

    /// Number of hourly slots in the shift.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// The worker at a given index.
    #[inline]
    pub fn worker(&self, index: usize) -> &Worker {
        &self.workers[index]
    }

    /// The position at a given index.
    #[inline]
    pub fn position(&self, index: usize) -> &Position {
        &self.positions[index]
    }

    /// All workers in input order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// All positions in input order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Interned family id of a position. Two positions share a family id
    /// iff they share a family tag.
    #[inline]
    pub fn family_id(&self, position: usize) -> u32 {
        self.family_ids[position]
    }

    /// Whether a worker is restricted from a position.
    #[inline]
    pub fn is_blocked(&self, worker: usize, position: usize) -> bool {
        self.blocked[worker][position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restrictions(entries: &[(u32, &[&str])]) -> RestrictionMap {
        entries
            .iter()
            .map(|(id, tags)| (*id, tags.iter().map(|t| t.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_zero_positions_is_degenerate() {
        let err = RosterProblem::new(
            vec![Worker::new(1, "A")],
            vec![],
            &RestrictionMap::new(),
            8,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::DegenerateProblem { positions: 0, .. }));
    }

    #[test]
    fn test_zero_workers_is_degenerate() {
        let err = RosterProblem::new(
            vec![],
            vec![Position::new(1, "P", 1, "F")],
            &RestrictionMap::new(),
            8,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::DegenerateProblem { workers: 0, .. }));
    }

    #[test]
    fn test_zero_slots_is_degenerate() {
        let err = RosterProblem::new(
            vec![Worker::new(1, "A")],
            vec![Position::new(1, "P", 1, "F")],
            &RestrictionMap::new(),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::DegenerateProblem { slots: 0, .. }));
    }

    #[test]
    fn test_duplicate_worker_id() {
        let err = RosterProblem::new(
            vec![Worker::new(1, "A"), Worker::new(1, "B")],
            vec![Position::new(1, "P", 1, "F")],
            &RestrictionMap::new(),
            8,
        )
        .unwrap_err();
        assert_eq!(err, ModelError::DuplicateWorkerId(1));
    }

    #[test]
    fn test_duplicate_position_id() {
        let err = RosterProblem::new(
            vec![Worker::new(1, "A")],
            vec![
                Position::new(9, "P1", 1, "F1"),
                Position::new(9, "P2", 1, "F2"),
            ],
            &RestrictionMap::new(),
            8,
        )
        .unwrap_err();
        assert_eq!(err, ModelError::DuplicatePositionId(9));
    }

    #[test]
    fn test_family_interning() {
        let problem = RosterProblem::new(
            vec![Worker::new(1, "A")],
            vec![
                Position::new(1, "P1", 1, "ramp"),
                Position::new(2, "P2", 1, "office"),
                Position::new(3, "P3", 1, "ramp"),
            ],
            &RestrictionMap::new(),
            4,
        )
        .unwrap();

        assert_eq!(problem.family_id(0), problem.family_id(2));
        assert_ne!(problem.family_id(0), problem.family_id(1));
    }

    #[test]
    fn test_blocked_table() {
        let problem = RosterProblem::new(
            vec![Worker::new(1, "A"), Worker::new(2, "B")],
            vec![
                Position::new(10, "P1", 1, "F1").with_restriction_tag("R1"),
                Position::new(11, "P2", 1, "F2"),
            ],
            &restrictions(&[(1, &["R1"])]),
            8,
        )
        .unwrap();

        // Worker 0 carries the R1 restriction, worker 1 does not.
        assert!(problem.is_blocked(0, 0));
        assert!(!problem.is_blocked(0, 1));
        assert!(!problem.is_blocked(1, 0));
        assert!(!problem.is_blocked(1, 1));
    }

    #[test]
    fn test_restriction_on_unknown_worker_is_ignored() {
        let problem = RosterProblem::new(
            vec![Worker::new(1, "A")],
            vec![Position::new(10, "P1", 1, "F1").with_restriction_tag("R1")],
            &restrictions(&[(99, &["R1"])]),
            8,
        )
        .unwrap();

        assert!(!problem.is_blocked(0, 0));
    }
}
