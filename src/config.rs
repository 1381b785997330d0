//! Run configuration.

/// Trials per run in the reference configuration.
pub const DEFAULT_TRIALS: u32 = 10_000;

/// Error type for invalid run configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least 2 trials are needed for a standard error, got {0}")]
    TooFewTrials(u32),
}

/// Seed and trial count for one simulation run.
///
/// # Examples
/// ```
/// use u_percolation::config::{SimulationConfig, DEFAULT_TRIALS};
///
/// let config = SimulationConfig::new(42);
/// assert_eq!(config.trials, DEFAULT_TRIALS);
/// assert!(config.with_trials(1).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Initial state of the random generator.
    pub seed: u64,
    /// Number of independent trials to average over.
    pub trials: u32,
}

impl SimulationConfig {
    /// Creates a configuration with the default trial count.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            trials: DEFAULT_TRIALS,
        }
    }

    /// Replaces the trial count.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Checks that the configuration yields defined statistics.
    ///
    /// # Errors
    /// Returns `Err` if `trials < 2`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials < 2 {
            return Err(ConfigError::TooFewTrials(self.trials));
        }
        Ok(())
    }
}
