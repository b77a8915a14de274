//! Per-generation observability records.

use super::runner::SessionState;

/// Snapshot emitted on every generation boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// Displayed generation counter after this boundary.
    pub generation: u64,

    /// Kills made by each side's traps, indexed by [`Side::index`](crate::sim::Side::index).
    pub kills_by_side: [u32; 2],

    /// Mean health of the targets still alive in the evolving side's half
    /// (0 when none are left).
    pub avg_target_health: f64,

    /// Traps placed by the opposing (manual) side.
    pub placements_by_opponent: usize,
}

/// Receives session events.
///
/// Implement this to log, persist or plot progress. `()` discards
/// everything and `Vec<GenerationRecord>` collects the records.
pub trait GenerationObserver {
    /// Called once per generation boundary, after the tick is scored.
    fn on_generation(&mut self, record: &GenerationRecord);

    /// Called once when the session reaches a terminal state.
    ///
    /// The default implementation is a no-op.
    fn on_session_end(&mut self, _state: SessionState) {}
}

impl GenerationObserver for () {
    fn on_generation(&mut self, _record: &GenerationRecord) {}
}

impl GenerationObserver for Vec<GenerationRecord> {
    fn on_generation(&mut self, record: &GenerationRecord) {
        self.push(record.clone());
    }
}
