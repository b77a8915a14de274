//! Session configuration.

use crate::error::ConfigError;
use crate::ga::EvolutionConfig;
use crate::sim::{Field, TargetSpec, TrapSpec};

/// How the evolving side's trap timers behave between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CooldownPolicy {
    /// Traps are rebuilt from the designated layout every tick, so their
    /// timers start at zero each tick and they can fire every tick.
    #[default]
    RebuildEachTick,

    /// Timers carry over between ticks and reset only when a new
    /// generation changes the designated layout.
    Persistent,
}

/// Everything needed to build a [`Session`](super::Session).
///
/// # Defaults
///
/// ```
/// use trap_evolve::session::SessionConfig;
///
/// let config = SessionConfig::default();
/// assert_eq!(config.generation_interval, 5);
/// assert_eq!(config.evolution.population_size, 5);
/// assert_eq!(config.targets.count, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub field: Field,
    pub evolution: EvolutionConfig,
    pub traps: TrapSpec,
    pub targets: TargetSpec,

    /// Ticks between generations (`f`). Must be at least 1.
    pub generation_interval: u64,

    pub cooldown_policy: CooldownPolicy,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            field: Field::default(),
            evolution: EvolutionConfig::default(),
            traps: TrapSpec::default(),
            targets: TargetSpec::default(),
            generation_interval: 5,
            cooldown_policy: CooldownPolicy::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Sets the population parameters.
    pub fn with_evolution(mut self, evolution: EvolutionConfig) -> Self {
        self.evolution = evolution;
        self
    }

    /// Sets the trap parameters.
    pub fn with_traps(mut self, traps: TrapSpec) -> Self {
        self.traps = traps;
        self
    }

    /// Sets the target parameters.
    pub fn with_targets(mut self, targets: TargetSpec) -> Self {
        self.targets = targets;
        self
    }

    /// Sets the number of ticks between generations.
    pub fn with_generation_interval(mut self, ticks: u64) -> Self {
        self.generation_interval = ticks;
        self
    }

    /// Sets the cooldown policy of the evolving side.
    pub fn with_cooldown_policy(mut self, policy: CooldownPolicy) -> Self {
        self.cooldown_policy = policy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every nested configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field.validate()?;
        self.evolution.validate()?;
        self.traps.validate()?;
        self.targets.validate()?;
        if self.generation_interval == 0 {
            return Err(ConfigError::GenerationInterval);
        }
        Ok(())
    }
}
