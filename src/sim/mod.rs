//! Simulation primitives the optimizer is coupled to.
//!
//! The field is split into two halves, one per [`Side`]. Targets wander
//! inside a half and take damage from the traps defending it.
//!
//! # Key Types
//!
//! - [`Field`] / [`CellRegion`]: grid geometry and random cell sampling
//! - [`Target`]: a moving, damageable agent
//! - [`Trap`] / [`TrapSet`]: cooldown-driven attack resolution

mod field;
mod target;
mod trap;

pub use field::{CellRegion, Field, Side};
pub use target::{Facing, Target, TargetSpec};
pub use trap::{Trap, TrapSet, TrapSpec};
