//! Game session: the explicit owner of all optimizer and simulation state.
//!
//! A [`Session`] is built once from a [`SessionConfig`], driven one tick at a
//! time by the host, and reset with [`Session::restart`]. Every
//! `generation_interval` ticks it advances the population against the
//! targets as they stand before that tick's attacks, and reports a
//! [`GenerationRecord`] to the caller's [`GenerationObserver`].
//!
//! # Tick order
//!
//! 1. targets move
//! 2. generation check (fitness reads the pre-attack snapshot)
//! 3. traps attack
//! 4. dead targets are removed, kills scored, win condition checked

mod clock;
mod config;
mod record;
mod runner;

pub use clock::SimulationClock;
pub use config::{CooldownPolicy, SessionConfig};
pub use record::{GenerationObserver, GenerationRecord};
pub use runner::{Session, SessionState};
