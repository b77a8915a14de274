//! Tick counting and generation cadence.

/// Monotonic tick counter that decides when a generation is due.
///
/// A generation is due on every tick `g` with `g % interval == 0`, so the
/// very first tick evolves the initial population.
///
/// ```
/// use trap_evolve::session::SimulationClock;
///
/// let mut clock = SimulationClock::new(3);
/// let due: Vec<bool> = (0..7)
///     .map(|_| {
///         let d = clock.generation_due();
///         clock.advance();
///         d
///     })
///     .collect();
/// assert_eq!(due, [true, false, false, true, false, false, true]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationClock {
    tick: u64,
    interval: u64,
    generation: u64,
}

impl SimulationClock {
    /// Creates a clock at tick 0.
    ///
    /// # Panics
    /// Panics if `interval` is 0; [`SessionConfig::validate`](super::SessionConfig::validate)
    /// rejects that before a session is built.
    pub fn new(interval: u64) -> Self {
        assert!(interval > 0, "generation interval must be positive");
        Self {
            tick: 0,
            interval,
            generation: 0,
        }
    }

    /// Index of the tick currently being processed.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Generations produced so far (the displayed counter).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the current tick is a generation boundary.
    pub fn generation_due(&self) -> bool {
        self.tick % self.interval == 0
    }

    /// Bumps the displayed generation counter.
    pub fn record_generation(&mut self) {
        self.generation += 1;
    }

    /// Moves on to the next tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    pub fn reset(&mut self) {
        self.tick = 0;
        self.generation = 0;
    }
}
