//! Configuration errors.
//!
//! All of these are raised by `validate()` before a population or session is
//! built. Nothing at tick time returns an error: an empty selection is a
//! programming error and panics, and negative health is just a dead target.

use thiserror::Error;

/// Invalid parameter detected while validating a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("min_layout_len must be at least 1")]
    EmptyLayout,

    #[error("invalid layout length range: min = {min}, max = {max}")]
    LayoutLengthRange { min: usize, max: usize },

    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRate(f64),

    #[error("generation_interval must be at least 1 tick")]
    GenerationInterval,

    #[error("targets per side must be at least 1")]
    NoTargets,

    #[error("turn_probability must be within [0, 1], got {0}")]
    TurnProbability(f64),

    #[error("grid_size must be positive, got {0}")]
    GridSize(i32),

    #[error("field {width}x{height} cannot fit one {grid_size}px cell per half")]
    FieldTooSmall {
        width: i32,
        height: i32,
        grid_size: i32,
    },

    #[error("cell region needs at least one column and one row, got {columns}x{rows}")]
    EmptyRegion { columns: i32, rows: i32 },

    #[error("target health must be within (0, 100], got {0}")]
    TargetHealth(f64),

    #[error("target speed must be finite and non-negative, got {0}")]
    TargetSpeed(f64),

    #[error("trap range must be positive, got {0}")]
    TrapRange(f64),

    #[error("trap damage must be finite and non-negative, got {0}")]
    TrapDamage(f64),
}
