//! Fitness evaluation.
//!
//! Scores a candidate [`Assignment`](crate::model::Assignment) against the
//! problem's constraints. Scoring is a pure function of the assignment and
//! the problem model — no hidden state — so the runner may evaluate a whole
//! colony in parallel.
//!
//! Per worker, the slots are walked in order and accumulate:
//!
//! - a penalty when the occupied position is blocked for that worker;
//! - a penalty when the occupied position repeats the immediately
//!   preceding occupied slot's family, and a diversity bonus otherwise
//!   (an unassigned slot clears the family memory without penalty or bonus);
//! - one penalty per worker whose day touches more than one classifier
//!   group.

use serde::{Deserialize, Serialize};

use crate::model::{Assignment, RosterProblem};

/// Penalty and bonus magnitudes. All values are added to the score per
/// occurrence, except `multi_classifier` which applies at most once per
/// worker.
///
/// # Examples
///
/// ```
/// use u_roster::fitness::FitnessWeights;
///
/// let weights = FitnessWeights::default();
/// assert_eq!(weights.restriction_violation, -100);
/// assert_eq!(weights.family_diversity, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessWeights {
    /// Added when a worker occupies a position they are restricted from.
    pub restriction_violation: i64,
    /// Added when a slot repeats the preceding occupied slot's family.
    pub family_repetition: i64,
    /// Added when a slot's family differs from the preceding occupied
    /// slot's family (or no preceding family is remembered).
    pub family_diversity: i64,
    /// Added once per worker whose day spans more than one classifier
    /// group.
    pub multi_classifier: i64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            restriction_violation: -100,
            family_repetition: -100,
            family_diversity: 10,
            multi_classifier: -50,
        }
    }
}

impl FitnessWeights {
    /// Sets the restriction violation penalty.
    pub fn with_restriction_violation(mut self, value: i64) -> Self {
        self.restriction_violation = value;
        self
    }

    /// Sets the consecutive family repetition penalty.
    pub fn with_family_repetition(mut self, value: i64) -> Self {
        self.family_repetition = value;
        self
    }

    /// Sets the family diversity bonus.
    pub fn with_family_diversity(mut self, value: i64) -> Self {
        self.family_diversity = value;
        self
    }

    /// Sets the once-per-worker multi-classifier penalty.
    pub fn with_multi_classifier(mut self, value: i64) -> Self {
        self.multi_classifier = value;
        self
    }
}

/// Scores assignments against one problem model.
///
/// Holds only shared references and plain weights, so one evaluator can be
/// used from many threads at once.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator<'a> {
    problem: &'a RosterProblem,
    weights: FitnessWeights,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator for a problem with the given weights.
    pub fn new(problem: &'a RosterProblem, weights: FitnessWeights) -> Self {
        Self { problem, weights }
    }

    /// The weights in effect.
    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// Computes the total fitness of an assignment. Higher is better.
    ///
    /// Deterministic for a fixed problem and assignment; dimensions must
    /// match the problem model.
    pub fn score(&self, assignment: &Assignment) -> i64 {
        debug_assert_eq!(assignment.workers(), self.problem.num_workers());
        debug_assert_eq!(assignment.slots(), self.problem.slots());

        let mut total = 0i64;
        for worker in 0..self.problem.num_workers() {
            total += self.score_worker(assignment, worker);
        }
        total
    }

    fn score_worker(&self, assignment: &Assignment, worker: usize) -> i64 {
        let mut score = 0i64;
        let mut previous_family: Option<u32> = None;
        let mut first_classifier: Option<u32> = None;
        let mut multiple_classifiers = false;

        for slot in 0..self.problem.slots() {
            let Some(position) = assignment.get(worker, slot) else {
                // Unassigned slot: clears the family memory, scores nothing.
                previous_family = None;
                continue;
            };

            if self.problem.is_blocked(worker, position) {
                score += self.weights.restriction_violation;
            }

            let family = self.problem.family_id(position);
            if previous_family == Some(family) {
                score += self.weights.family_repetition;
            } else {
                score += self.weights.family_diversity;
            }
            previous_family = Some(family);

            let classifier = self.problem.position(position).classifier_group;
            match first_classifier {
                None => first_classifier = Some(classifier),
                Some(first) if first != classifier => multiple_classifiers = true,
                Some(_) => {}
            }
        }

        if multiple_classifiers {
            score += self.weights.multi_classifier;
        }
        score
    }
}
