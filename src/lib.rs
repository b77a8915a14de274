//! Real-time evolutionary optimizer for trap layouts.
//!
//! A population of candidate trap layouts is re-evolved every few ticks of a
//! running simulation, scored against the live positions of moving,
//! damageable targets. The simulation never pauses for the optimizer: each
//! tick moves targets, optionally advances one generation, resolves trap
//! attacks and removes dead targets.
//!
//! - [`sim`]: field geometry, targets and trap attack resolution.
//! - [`ga`]: placements, layouts, fitness scoring and the population with
//!   its selection, crossover and mutation operators.
//! - [`session`]: the explicit session object that owns all state, the
//!   simulation clock and the generation records emitted to observers.
//!
//! # Architecture
//!
//! Everything runs on the caller's thread, one tick at a time. Randomness is
//! injected through any [`rand::Rng`], so seeded sessions are reproducible.

pub mod error;
pub mod ga;
mod random;
pub mod session;
pub mod sim;

pub use error::ConfigError;
pub use random::create_rng;
