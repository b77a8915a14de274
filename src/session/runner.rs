//! Tick-driven session loop.
//!
//! [`Session`] owns the population, both target sets, both trap sets and the
//! clock. The host calls [`Session::tick`] once per frame; nothing inside a
//! tick blocks.

use super::clock::SimulationClock;
use super::config::{CooldownPolicy, SessionConfig};
use super::record::{GenerationObserver, GenerationRecord};
use crate::error::ConfigError;
use crate::ga::{FitnessEvaluator, GenerationSummary, Layout, Population};
use crate::random::create_rng;
use crate::sim::{Side, Target, TrapSet};
use rand::rngs::StdRng;
use rand::Rng;

/// Session-level state machine.
///
/// `Running` moves to `SideAWins` once every target fielded by side B is
/// dead, or to `SideBWins` once every target fielded by side A is dead.
/// Both terminal states end ticking until [`Session::restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    Running,
    SideAWins,
    SideBWins,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::Running)
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            SessionState::Running => None,
            SessionState::SideAWins => Some(Side::A),
            SessionState::SideBWins => Some(Side::B),
        }
    }
}

/// One game session.
///
/// Side A defends the left half with traps placed through
/// [`place_trap`](Session::place_trap); side B defends the right half with
/// the designated layout of the evolving population. Each side fields
/// targets into the opponent's half.
///
/// # Usage
///
/// ```
/// use trap_evolve::session::{GenerationRecord, Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::default().with_seed(42)).unwrap();
/// session.place_trap(125, 300);
///
/// let mut records: Vec<GenerationRecord> = Vec::new();
/// session.run(10, &mut records);
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].generation, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Session<R: Rng = StdRng> {
    config: SessionConfig,
    rng: R,
    population: Population,
    active_layout: Layout,
    last_summary: Option<GenerationSummary>,
    evolved_traps: TrapSet,
    manual_traps: TrapSet,
    /// Indexed by the side that fielded the targets.
    targets: [Vec<Target>; 2],
    /// Indexed by the side whose traps made the kill.
    kills: [u32; 2],
    clock: SimulationClock,
    state: SessionState,
}

impl Session<StdRng> {
    /// Builds a session seeded from `config.seed` (random when `None`).
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(config, create_rng(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Builds a session drawing all randomness from `rng`.
    ///
    /// Fails fast on an invalid configuration.
    pub fn with_rng(config: SessionConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = Population::new(
            config.evolution.clone(),
            config.field.region(Side::B),
            FitnessEvaluator::new(config.traps.range),
        )?;

        let mut session = Self {
            clock: SimulationClock::new(config.generation_interval),
            config,
            rng,
            population,
            active_layout: Layout::default(),
            last_summary: None,
            evolved_traps: TrapSet::new(),
            manual_traps: TrapSet::new(),
            targets: [Vec::new(), Vec::new()],
            kills: [0; 2],
            state: SessionState::Running,
        };
        session.restart();
        Ok(session)
    }

    /// Starts over: fresh population, fresh targets, no manual traps.
    pub fn restart(&mut self) {
        self.population.initialize(&mut self.rng);
        self.active_layout = self.population.layouts().first().cloned().unwrap_or_default();
        self.last_summary = None;
        self.evolved_traps = TrapSet::from_layout(&self.active_layout);
        self.manual_traps = TrapSet::new();

        for side in Side::BOTH {
            let region = self.config.field.region(side.opponent());
            let spec = &self.config.targets;
            let rng = &mut self.rng;
            let spawned: Vec<Target> = (0..spec.count)
                .map(|_| Target::spawn(&region, spec, rng))
                .collect();
            self.targets[side.index()] = spawned;
        }

        self.kills = [0; 2];
        self.clock.reset();
        self.state = SessionState::Running;

        tracing::info!(
            population = self.population.len(),
            targets_per_side = self.config.targets.count,
            interval = self.clock.interval(),
            "session started"
        );
    }

    /// Processes one tick and returns the resulting state.
    ///
    /// Order: movement, generation check, attacks, scoring. Once the
    /// session is terminal this is a no-op.
    pub fn tick<O: GenerationObserver + ?Sized>(&mut self, observer: &mut O) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.move_targets();

        let generation_due = self.clock.generation_due();
        if generation_due {
            self.evolve();
        }

        self.resolve_attacks();
        self.remove_dead();
        self.state = self.check_winner();

        if generation_due {
            observer.on_generation(&self.record());
        }
        if self.state.is_terminal() {
            tracing::info!(
                state = ?self.state,
                tick = self.clock.tick(),
                generation = self.clock.generation(),
                kills_a = self.kills[Side::A.index()],
                kills_b = self.kills[Side::B.index()],
                "session over"
            );
            observer.on_session_end(self.state);
        }

        self.clock.advance();
        self.state
    }

    /// Ticks until the session ends or `max_ticks` have run.
    pub fn run<O: GenerationObserver + ?Sized>(
        &mut self,
        max_ticks: u64,
        observer: &mut O,
    ) -> SessionState {
        for _ in 0..max_ticks {
            if self.tick(observer).is_terminal() {
                break;
            }
        }
        self.state
    }

    /// Adds a manual side A trap at the cell under `(x, y)`.
    ///
    /// Returns `false` if the position is outside side A's half.
    pub fn place_trap(&mut self, x: i32, y: i32) -> bool {
        match self.config.field.region(Side::A).snap(x, y) {
            Some(placement) => {
                self.manual_traps.push(placement);
                true
            }
            None => false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The layout currently instantiated as side B's traps.
    pub fn active_layout(&self) -> &Layout {
        &self.active_layout
    }

    /// Summary of the most recent generation, if any ran since the last restart.
    pub fn last_summary(&self) -> Option<&GenerationSummary> {
        self.last_summary.as_ref()
    }

    pub fn evolved_traps(&self) -> &TrapSet {
        &self.evolved_traps
    }

    pub fn manual_traps(&self) -> &TrapSet {
        &self.manual_traps
    }

    /// Targets fielded by `side`; they run in the opponent's half.
    pub fn targets(&self, side: Side) -> &[Target] {
        &self.targets[side.index()]
    }

    /// Mutable access for the hosting simulation.
    pub fn targets_mut(&mut self, side: Side) -> &mut Vec<Target> {
        &mut self.targets[side.index()]
    }

    /// Kills made by each side's traps, indexed by [`Side::index`].
    pub fn kills(&self) -> [u32; 2] {
        self.kills
    }

    fn move_targets(&mut self) {
        let turn_probability = self.config.targets.turn_probability;
        for side in Side::BOTH {
            let region = self.config.field.region(side.opponent());
            for target in &mut self.targets[side.index()] {
                target.step(&region, turn_probability, &mut self.rng);
            }
        }
    }

    /// Advances the population against the targets in side B's half as they
    /// stand before this tick's attacks.
    fn evolve(&mut self) {
        let snapshot = &self.targets[Side::A.index()];
        let summary = self.population.advance_generation(snapshot, &mut self.rng);
        let best = self.population.best_layout(snapshot);
        if *best != self.active_layout {
            self.active_layout = best.clone();
            self.evolved_traps = TrapSet::from_layout(&self.active_layout);
        }
        self.last_summary = Some(summary);
        self.clock.record_generation();

        tracing::debug!(
            tick = self.clock.tick(),
            generation = self.clock.generation(),
            traps = self.active_layout.len(),
            "designated layout updated"
        );
    }

    fn resolve_attacks(&mut self) {
        if self.config.cooldown_policy == CooldownPolicy::RebuildEachTick {
            self.evolved_traps.reset_cooldowns();
        }
        let spec = &self.config.traps;
        self.evolved_traps
            .resolve(spec, &mut self.targets[Side::A.index()]);
        self.manual_traps
            .resolve(spec, &mut self.targets[Side::B.index()]);
    }

    /// Replaces each target list with its survivors and credits the kills
    /// to the defenders of the half the dead targets ran in.
    fn remove_dead(&mut self) {
        for side in Side::BOTH {
            let survivors: Vec<Target> = self.targets[side.index()]
                .iter()
                .filter(|t| !t.is_dead())
                .cloned()
                .collect();
            let killed = self.targets[side.index()].len() - survivors.len();
            self.kills[side.opponent().index()] += killed as u32;
            self.targets[side.index()] = survivors;
        }
    }

    fn check_winner(&self) -> SessionState {
        if self.targets[Side::B.index()].is_empty() {
            SessionState::SideAWins
        } else if self.targets[Side::A.index()].is_empty() {
            SessionState::SideBWins
        } else {
            SessionState::Running
        }
    }

    fn record(&self) -> GenerationRecord {
        let in_evolving_half = &self.targets[Side::A.index()];
        let avg_target_health = if in_evolving_half.is_empty() {
            0.0
        } else {
            in_evolving_half.iter().map(|t| t.health).sum::<f64>() / in_evolving_half.len() as f64
        };
        GenerationRecord {
            generation: self.clock.generation(),
            kills_by_side: self.kills,
            avg_target_health,
            placements_by_opponent: self.manual_traps.len(),
        }
    }
}
