//! ACO configuration.
//!
//! [`AcoConfig`] holds all parameters that control the optimization loop.

/// Configuration for the ant colony optimizer.
///
/// Defaults run a fixed 30-generation, 60-ant colony with no early
/// termination.
///
/// # Examples
///
/// ```
/// use u_roster::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.ants, 60);
/// assert_eq!(config.generations, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_roster::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(100)
///     .with_evaporation_rate(0.5)
///     .with_stagnation_limit(10)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Number of ants (candidate assignments) per generation.
    pub ants: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Fraction of pheromone removed before each reinforcement, in [0, 1].
    ///
    /// `1.0` (the default) fully resets the field each generation so only
    /// the latest colony's deposits guide the next one; lower rates retain
    /// longer memory.
    pub evaporation_rate: f64,

    /// Pheromone deposit scale. A solution deposits
    /// `intensity × normalized_fitness` on every cell it occupies.
    pub intensity: f64,

    /// Number of generations without incumbent improvement before stopping.
    ///
    /// Set to 0 (the default) to disable early stopping and always run the
    /// full generation count.
    pub stagnation_limit: usize,

    /// Whether to score the colony in parallel using rayon.
    ///
    /// Construction always runs sequentially on the seeded generator so
    /// runs stay reproducible; only the pure scoring fans out.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked between generations; the incumbent found so far is returned
    /// when the limit is reached.
    pub time_limit_ms: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 60,
            generations: 30,
            evaporation_rate: 1.0,
            intensity: 2.0,
            stagnation_limit: 0,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AcoConfig {
    /// Sets the colony size.
    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the evaporation rate (clamped to [0, 1]).
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the deposit intensity.
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    /// Sets the stagnation limit (0 to disable early stopping).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.ants == 0 {
            return Err("ants must be at least 1".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(format!(
                "evaporation_rate must be in [0, 1], got {}",
                self.evaporation_rate
            ));
        }
        if !self.intensity.is_finite() || self.intensity <= 0.0 {
            return Err(format!(
                "intensity must be positive and finite, got {}",
                self.intensity
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
