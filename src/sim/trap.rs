//! Trap attack resolution.
//!
//! Each [`Trap`] carries a cooldown timer. When the timer is zero the trap
//! damages the first target in range (in collection order) and rearms;
//! it never damages more than one target per tick.

use super::target::Target;
use crate::error::ConfigError;
use crate::ga::{Layout, Placement};

/// Attack parameters shared by all traps.
///
/// `range` doubles as the fitness radius, so layouts are scored on exactly
/// the targets their traps could hit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapSpec {
    /// Attack radius in pixels.
    pub range: f64,

    /// Health removed per hit.
    pub damage: f64,

    /// Ticks between hits.
    pub cooldown: u32,
}

impl Default for TrapSpec {
    fn default() -> Self {
        Self {
            range: 30.0,
            damage: 5.0,
            cooldown: 40,
        }
    }
}

impl TrapSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.range > 0.0) {
            return Err(ConfigError::TrapRange(self.range));
        }
        if !(self.damage.is_finite() && self.damage >= 0.0) {
            return Err(ConfigError::TrapDamage(self.damage));
        }
        Ok(())
    }
}

/// A placement instantiated as a live trap.
#[derive(Debug, Clone, PartialEq)]
pub struct Trap {
    placement: Placement,
    timer: u32,
}

impl Trap {
    /// Creates a ready trap (timer at zero).
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            timer: 0,
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Remaining cooldown ticks.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Resolves one tick of this trap against `targets`.
    ///
    /// Returns the index of the damaged target, if any. A trap that fires
    /// also counts down in the same tick, so it ends at `cooldown - 1`.
    pub fn attack(&mut self, spec: &TrapSpec, targets: &mut [Target]) -> Option<usize> {
        let mut hit = None;
        if self.timer == 0 {
            let (x, y) = (self.placement.x() as f64, self.placement.y() as f64);
            if let Some(idx) = targets
                .iter()
                .position(|t| t.distance_to(x, y) <= spec.range)
            {
                targets[idx].take_damage(spec.damage);
                self.timer = spec.cooldown;
                hit = Some(idx);
            }
        }

        if self.timer > 0 {
            self.timer -= 1;
        }
        hit
    }
}

/// The traps defending one half of the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrapSet {
    traps: Vec<Trap>,
}

impl TrapSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiates every placement of `layout` as a ready trap.
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            traps: layout.iter().copied().map(Trap::new).collect(),
        }
    }

    pub fn push(&mut self, placement: Placement) {
        self.traps.push(Trap::new(placement));
    }

    pub fn len(&self) -> usize {
        self.traps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trap> {
        self.traps.iter()
    }

    /// Sets every timer back to zero.
    pub fn reset_cooldowns(&mut self) {
        for trap in &mut self.traps {
            trap.timer = 0;
        }
    }

    /// Lets every trap attack once, in placement order. Returns the number of hits.
    pub fn resolve(&mut self, spec: &TrapSpec, targets: &mut [Target]) -> usize {
        let mut hits = 0;
        for trap in &mut self.traps {
            if let Some(idx) = trap.attack(spec, targets) {
                hits += 1;
                tracing::trace!(
                    x = trap.placement.x(),
                    y = trap.placement.y(),
                    target = idx,
                    health = targets[idx].health,
                    "trap hit"
                );
            }
        }
        hits
    }
}
