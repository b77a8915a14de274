//! Genetic optimizer for trap layouts.
//!
//! Individuals are [`Layout`]s: ordered lists of grid-aligned [`Placement`]s.
//! Fitness is the number of `(placement, target)` pairs in range, measured
//! against a live snapshot of targets, so the same layout can score
//! differently from one generation to the next.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: population size, mutation rate, layout length bounds
//! - [`FitnessEvaluator`]: scores a layout against a target snapshot
//! - [`Population`]: initialization and generational replacement
//!
//! # Submodules
//!
//! - [`operators`]: half-split crossover and single-placement mutation
//! - [`selection`]: stable fitness ranking and top-two parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
pub mod operators;
mod population;
pub mod selection;
mod types;

pub use config::EvolutionConfig;
pub use fitness::FitnessEvaluator;
pub use population::{GenerationSummary, Population};
pub use types::{FitnessScore, Layout, Placement};
