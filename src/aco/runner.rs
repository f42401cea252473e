//! ACO generation loop execution.
//!
//! [`AcoRunner`] orchestrates the full run: construct a colony, score it,
//! track the incumbent, then evaporate and reinforce the pheromone field
//! before the next generation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::debug;

use super::config::AcoConfig;
use super::construction::build_assignment;
use super::pheromone::PheromoneField;
use crate::fitness::{FitnessEvaluator, FitnessWeights};
use crate::model::{RosterProblem, Solution};

/// Result of an ACO optimization run.
///
/// Contains the incumbent solution together with statistics about the run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The best solution found during the entire run.
    pub best: Solution,

    /// Fitness of the incumbent (same as `best.fitness`).
    pub best_fitness: i64,

    /// Number of generations actually executed.
    pub generations: usize,

    /// Whether the run stopped early due to stagnation.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Incumbent fitness at the end of each executed generation.
    pub fitness_history: Vec<i64>,
}

/// Executes the ant colony optimization loop.
///
/// # Usage
///
/// ```ignore
/// let problem = RosterProblem::new(workers, positions, &restrictions, 8)?;
/// let config = AcoConfig::default().with_seed(42);
/// let result = AcoRunner::run(&problem, &FitnessWeights::default(), &config);
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AcoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(problem: &RosterProblem, weights: &FitnessWeights, config: &AcoConfig) -> AcoResult {
        Self::run_with_cancel(problem, weights, config, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the loop stops
    /// at the end of the current generation and returns the incumbent
    /// found so far. At least one generation always completes, so a result
    /// is always available.
    pub fn run_with_cancel(
        problem: &RosterProblem,
        weights: &FitnessWeights,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult {
        config.validate().expect("invalid AcoConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let evaluator = FitnessEvaluator::new(problem, *weights);
        let mut field = PheromoneField::new(
            problem.num_workers(),
            problem.slots(),
            problem.num_positions(),
        );

        let start = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);

        let mut best: Option<Solution> = None;
        let mut fitness_history = Vec::with_capacity(config.generations);
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let mut completed = 0usize;

        for generation in 0..config.generations {
            // Construction stays on the caller-seeded generator; the field
            // is read-only until the update below.
            let assignments: Vec<_> = (0..config.ants)
                .map(|_| build_assignment(&field, &mut rng))
                .collect();

            let solutions: Vec<Solution> = if config.parallel {
                assignments
                    .into_par_iter()
                    .map(|a| {
                        let fitness = evaluator.score(&a);
                        Solution::new(a, fitness)
                    })
                    .collect()
            } else {
                assignments
                    .into_iter()
                    .map(|a| {
                        let fitness = evaluator.score(&a);
                        Solution::new(a, fitness)
                    })
                    .collect()
            };

            // Strict improvement only: ties keep the first-found incumbent.
            let mut improved = false;
            for solution in &solutions {
                if best.as_ref().is_none_or(|b| solution.fitness > b.fitness) {
                    best = Some(solution.clone());
                    improved = true;
                }
            }
            if improved {
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }

            // Single-writer update, applied strictly after the whole colony
            // has been scored.
            field.evaporate(config.evaporation_rate);
            field.reinforce(&solutions, config.intensity);

            let best_fitness = best.as_ref().expect("colony is non-empty").fitness;
            fitness_history.push(best_fitness);
            completed = generation + 1;

            debug!(generation = completed, best_fitness, "generation complete");

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = deadline {
                if start.elapsed() >= limit {
                    break;
                }
            }
        }

        let best = best.expect("at least one generation ran");
        AcoResult {
            best_fitness: best.fitness,
            best,
            generations: completed,
            stagnated,
            cancelled,
            fitness_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, RestrictionMap, Worker};
    use std::collections::HashSet;

    fn restrictions(entries: &[(u32, &[&str])]) -> RestrictionMap {
        entries
            .iter()
            .map(|(id, tags)| {
                let set: HashSet<String> = tags.iter().map(|t| t.to_string()).collect();
                (*id, set)
            })
            .collect()
    }

    /// Spec scenario: one worker carrying restriction R1, one restricted
    /// and one free position, a single slot.
    fn restricted_problem() -> RosterProblem {
        RosterProblem::new(
            vec![Worker::new(1, "A")],
            vec![
                Position::new(1, "P1", 1, "F1").with_restriction_tag("R1"),
                Position::new(2, "P2", 1, "F2"),
            ],
            &restrictions(&[(1, &["R1"])]),
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_converges_away_from_restricted_position() {
        let problem = restricted_problem();
        let config = AcoConfig::default()
            .with_ants(30)
            .with_generations(40)
            .with_evaporation_rate(0.5)
            .with_seed(42)
            .with_parallel(false);

        let result = AcoRunner::run(&problem, &FitnessWeights::default(), &config);

        // The free position scores +10, the restricted one -90.
        assert_eq!(result.best_fitness, 10);
        assert_eq!(result.best.assignment.get(0, 0), Some(1));
    }

    #[test]
    fn test_converges_to_family_diversity() {
        // One worker, two slots, two families, a single classifier group:
        // the optimum alternates families for two diversity bonuses.
        let problem = RosterProblem::new(
            vec![Worker::new(1, "A")],
            vec![
                Position::new(1, "P1", 1, "F1"),
                Position::new(2, "P2", 1, "F2"),
            ],
            &RestrictionMap::new(),
            2,
        )
        .unwrap();
        let config = AcoConfig::default()
            .with_ants(30)
            .with_generations(40)
            .with_evaporation_rate(0.5)
            .with_seed(42)
            .with_parallel(false);

        let result = AcoRunner::run(&problem, &FitnessWeights::default(), &config);

        assert_eq!(result.best_fitness, 20);
        let first = result.best.assignment.get(0, 0).unwrap();
        let second = result.best.assignment.get(0, 1).unwrap();
        assert_ne!(problem.family_id(first), problem.family_id(second));
    }

    #[test]
    fn test_incumbent_is_monotone_non_decreasing() {
        let problem = restricted_problem();
        let config = AcoConfig::default()
            .with_ants(10)
            .with_generations(25)
            .with_evaporation_rate(0.8)
            .with_seed(7)
            .with_parallel(false);

        let result = AcoRunner::run(&problem, &FitnessWeights::default(), &config);

        assert_eq!(result.fitness_history.len(), 25);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "incumbent fitness regressed: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_full_budget_by_default() {
        let problem = restricted_problem();
        let config = AcoConfig::default()
            .with_ants(5)
            .with_generations(12)
            .with_seed(42)
            .with_parallel(false);

        let result = AcoRunner::run(&problem, &FitnessWeights::default(), &config);

        // stagnation_limit defaults to 0: no early stop even though the
        // optimum is found almost immediately.
        assert_eq!(result.generations, 12);
        assert!(!result.stagnated);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_stagnation_stops_early() {
        let problem = restricted_problem();
        let config = AcoConfig::default()
            .with_ants(20)
            .with_generations(1000)
            .with_stagnation_limit(5)
            .with_seed(42)
            .with_parallel(false);

        let result = AcoRunner::run(&problem, &FitnessWeights::default(), &config);

        assert!(result.stagnated);
        assert!(result.generations < 1000);
        // Early stop still returns the incumbent.
        assert_eq!(result.best_fitness, 10);
    }

    #[test]
    fn test_cancellation_returns_incumbent() {
        let problem = restricted_problem();
        let config = AcoConfig::default()
            .with_ants(10)
            .with_generations(10_000)
            .with_seed(42)
            .with_parallel(false);

        // Flag set before the run: the loop still completes one generation
        // and returns its incumbent.
        let cancel = Arc::new(AtomicBool::new(true));
        let result = AcoRunner::run_with_cancel(
            &problem,
            &FitnessWeights::default(),
            &config,
            Some(cancel),
        );

        assert!(result.cancelled);
        assert_eq!(result.generations, 1);
        assert!(!result.fitness_history.is_empty());
    }

    #[test]
    fn test_time_limit_stops_run() {
        let problem = restricted_problem();
        let config = AcoConfig::default()
            .with_ants(10)
            .with_generations(100_000)
            .with_time_limit_ms(50)
            .with_seed(42)
            .with_parallel(false);

        let result = AcoRunner::run(&problem, &FitnessWeights::default(), &config);

        assert!(!result.stagnated);
        assert!(!result.cancelled);
        assert!(result.generations >= 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let problem = restricted_problem();
        let config = AcoConfig::default()
            .with_ants(15)
            .with_generations(10)
            .with_evaporation_rate(0.6)
            .with_seed(1234)
            .with_parallel(false);

        let a = AcoRunner::run(&problem, &FitnessWeights::default(), &config);
        let b = AcoRunner::run(&problem, &FitnessWeights::default(), &config);

        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // Scoring is pure and the incumbent scan is sequential, so the
        // parallel fan-out cannot change the result for a fixed seed.
        let problem = restricted_problem();
        let base = AcoConfig::default()
            .with_ants(20)
            .with_generations(8)
            .with_evaporation_rate(0.5)
            .with_seed(99);

        let sequential = AcoRunner::run(
            &problem,
            &FitnessWeights::default(),
            &base.clone().with_parallel(false),
        );
        let parallel = AcoRunner::run(
            &problem,
            &FitnessWeights::default(),
            &base.with_parallel(true),
        );

        assert_eq!(sequential.best, parallel.best);
        assert_eq!(sequential.fitness_history, parallel.fitness_history);
    }

    #[test]
    fn test_multi_worker_improvement_over_first_generation() {
        // A larger instance: the incumbent after the full run should be at
        // least as good as after the first generation.
        let workers = (1..=6).map(|i| Worker::new(i, format!("W{i}"))).collect();
        let positions = (1..=8)
            .map(|i| Position::new(i, format!("P{i}"), i % 3, format!("F{}", i % 4)))
            .collect();
        let problem = RosterProblem::new(workers, positions, &RestrictionMap::new(), 8).unwrap();

        let config = AcoConfig::default()
            .with_ants(40)
            .with_generations(20)
            .with_evaporation_rate(0.5)
            .with_seed(42)
            .with_parallel(false);

        let result = AcoRunner::run(&problem, &FitnessWeights::default(), &config);

        assert_eq!(result.fitness_history.len(), 20);
        assert!(result.best_fitness >= result.fitness_history[0]);
    }

    #[test]
    #[should_panic(expected = "invalid AcoConfig")]
    fn test_invalid_config_panics() {
        let problem = restricted_problem();
        let config = AcoConfig::default().with_ants(0);
        let _ = AcoRunner::run(&problem, &FitnessWeights::default(), &config);
    }
}
