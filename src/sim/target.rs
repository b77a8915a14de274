//! Moving, damageable targets.

use super::field::CellRegion;
use crate::error::ConfigError;
use rand::Rng;

/// Heading of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    /// Picks a heading uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Facing {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Parameters shared by every target of a session.
///
/// `turn_probability` is the chance per tick that a target picks a new
/// random heading. The default of 1/51 reproduces a "one in fifty-one"
/// roll per frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSpec {
    /// Targets fielded by each side at session start.
    pub count: usize,

    /// Starting health.
    pub health: f64,

    /// Distance moved per tick.
    pub speed: f64,

    /// Probability of a random heading change per tick (0.0–1.0).
    pub turn_probability: f64,
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            count: 5,
            health: 100.0,
            speed: 2.0,
            turn_probability: 1.0 / 51.0,
        }
    }
}

impl TargetSpec {
    /// Sets the number of targets per side.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the movement speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the per-tick turn probability.
    pub fn with_turn_probability(mut self, p: f64) -> Self {
        self.turn_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::NoTargets);
        }
        if !(self.health > 0.0 && self.health <= 100.0) {
            return Err(ConfigError::TargetHealth(self.health));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(ConfigError::TargetSpeed(self.speed));
        }
        if !(0.0..=1.0).contains(&self.turn_probability) {
            return Err(ConfigError::TurnProbability(self.turn_probability));
        }
        Ok(())
    }
}

/// A moving, damageable agent.
///
/// Health is allowed to drop below zero. A target with `health <= 0` is
/// dead; the collection that owns it filters it out at the end of a tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub position: (f64, f64),
    pub health: f64,
    pub speed: f64,
    pub facing: Facing,
}

impl Target {
    pub fn new(position: (f64, f64), spec: &TargetSpec, facing: Facing) -> Self {
        Self {
            position,
            health: spec.health,
            speed: spec.speed,
            facing,
        }
    }

    /// Spawns a target on a random cell corner of `region`, facing a random way.
    pub fn spawn<R: Rng>(region: &CellRegion, spec: &TargetSpec, rng: &mut R) -> Self {
        let position = region.random_corner(rng);
        let facing = Facing::random(rng);
        Self::new(position, spec, facing)
    }

    pub fn x(&self) -> f64 {
        self.position.0
    }

    pub fn y(&self) -> f64 {
        self.position.1
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn take_damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    /// Euclidean distance from this target to `(x, y)`.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.position.0 - x;
        let dy = self.position.1 - y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Advances one tick: move, maybe turn, then bounce off the region edges.
    ///
    /// A target pushed past an edge is clamped onto it and turned to face
    /// back inside.
    pub fn step<R: Rng>(&mut self, region: &CellRegion, turn_probability: f64, rng: &mut R) {
        let (x, y) = &mut self.position;
        match self.facing {
            Facing::Up => *y -= self.speed,
            Facing::Down => *y += self.speed,
            Facing::Left => *x -= self.speed,
            Facing::Right => *x += self.speed,
        }

        if rng.random_bool(turn_probability) {
            self.facing = Facing::random(rng);
        }

        let (min_x, max_x) = region.x_bounds();
        let (min_y, max_y) = region.y_bounds();

        if *x < min_x {
            *x = min_x;
            self.facing = Facing::Right;
        } else if *x >= max_x {
            *x = max_x;
            self.facing = Facing::Left;
        }

        if *y < min_y {
            *y = min_y;
            self.facing = Facing::Down;
        } else if *y >= max_y {
            *y = max_y;
            self.facing = Facing::Up;
        }
    }
}
