//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds the parameters of the population and its
//! operators. Timing (how often a generation runs) belongs to the session.

use crate::error::ConfigError;

/// Configuration for the layout population.
///
/// # Defaults
///
/// ```
/// use trap_evolve::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 5);
/// assert_eq!((config.min_layout_len, config.max_layout_len), (5, 10));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use trap_evolve::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(20)
///     .with_mutation_rate(0.25)
///     .with_layout_len(4, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of layouts in the population. Constant across generations.
    pub population_size: usize,

    /// Probability that a child gets one placement re-drawn (0.0–1.0).
    pub mutation_rate: f64,

    /// Shortest layout drawn at initialization.
    pub min_layout_len: usize,

    /// Longest layout drawn at initialization.
    pub max_layout_len: usize,

    /// Whether to score layouts in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Scores are collected
    /// in population order either way, so selection is unaffected.
    pub parallel: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 5,
            mutation_rate: 0.1,
            min_layout_len: 5,
            max_layout_len: 10,
            parallel: false,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the inclusive range of initial layout lengths.
    pub fn with_layout_len(mut self, min: usize, max: usize) -> Self {
        self.min_layout_len = min;
        self.max_layout_len = max;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.min_layout_len == 0 {
            return Err(ConfigError::EmptyLayout);
        }
        if self.min_layout_len > self.max_layout_len {
            return Err(ConfigError::LayoutLengthRange {
                min: self.min_layout_len,
                max: self.max_layout_len,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
