//! Roster table output.
//!
//! Turns a solved assignment into the table the storage collaborators
//! consume: one row per occupied (worker, slot), ordered by worker id then
//! slot, with human-readable time slot labels. Unassigned slots produce no
//! row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aco::{AcoConfig, AcoRunner};
use crate::fitness::FitnessWeights;
use crate::model::{Assignment, RosterProblem};

/// Hour at which the default shift starts (06:00).
pub const DEFAULT_SHIFT_START_HOUR: u32 = 6;

/// Slot count of the default 06:00–14:00 shift.
pub const DEFAULT_SLOTS_PER_DAY: usize = 8;

/// One placed (worker, slot) cell of a day's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    /// Target date of the schedule.
    pub date: NaiveDate,
    /// Human-readable slot label, e.g. `"06:00 - 07:00"`.
    pub time_slot: String,
    /// Worker identifier.
    pub worker_id: u32,
    /// Worker display name.
    pub worker_name: String,
    /// Position identifier.
    pub position_id: u32,
    /// Position display name.
    pub position_name: String,
    /// Position classifier group.
    pub classifier_group: u32,
    /// Position family tag.
    pub family: String,
}

/// A solved day: the output table plus the fitness the schedule achieved.
///
/// The caller decides whether the fitness is good enough to accept or
/// whether to discard the day's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRoster {
    /// Target date.
    pub date: NaiveDate,
    /// Fitness of the underlying solution.
    pub fitness: i64,
    /// Output rows, ordered by worker id then slot.
    pub rows: Vec<RosterRow>,
}

/// Formats the label of an hourly slot, `"HH:MM - HH:MM"`.
///
/// # Examples
///
/// ```
/// use u_roster::roster::slot_label;
///
/// assert_eq!(slot_label(6, 0), "06:00 - 07:00");
/// assert_eq!(slot_label(6, 7), "13:00 - 14:00");
/// ```
pub fn slot_label(start_hour: u32, slot: usize) -> String {
    let from = (start_hour as usize + slot) % 24;
    let to = (start_hour as usize + slot + 1) % 24;
    format!("{from:02}:00 - {to:02}:00")
}

/// Builds the output table for one assignment.
///
/// Rows are ordered by worker id, then slot. Slots left unassigned are
/// omitted rather than emitted as empty rows.
pub fn roster_rows(
    problem: &RosterProblem,
    assignment: &Assignment,
    date: NaiveDate,
    start_hour: u32,
) -> Vec<RosterRow> {
    let mut worker_order: Vec<usize> = (0..problem.num_workers()).collect();
    worker_order.sort_by_key(|&w| problem.worker(w).id);

    let mut rows = Vec::new();
    for worker_index in worker_order {
        let worker = problem.worker(worker_index);
        for slot in 0..problem.slots() {
            let Some(position_index) = assignment.get(worker_index, slot) else {
                continue;
            };
            let position = problem.position(position_index);
            rows.push(RosterRow {
                date,
                time_slot: slot_label(start_hour, slot),
                worker_id: worker.id,
                worker_name: worker.name.clone(),
                position_id: position.id,
                position_name: position.name.clone(),
                classifier_group: position.classifier_group,
                family: position.family.clone(),
            });
        }
    }
    rows
}

/// Solves a single date end-to-end: runs the optimizer with a fresh
/// pheromone field and assembles the output table for the incumbent.
///
/// The calendar collaborator supplies the dates; call this once per date.
pub fn solve_day(
    problem: &RosterProblem,
    weights: &FitnessWeights,
    config: &AcoConfig,
    date: NaiveDate,
) -> DayRoster {
    let result = AcoRunner::run(problem, weights, config);
    let rows = roster_rows(
        problem,
        &result.best.assignment,
        date,
        DEFAULT_SHIFT_START_HOUR,
    );
    DayRoster {
        date,
        fitness: result.best_fitness,
        rows,
    }
}
