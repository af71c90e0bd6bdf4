//! Per-tick summary returned by the coordinator.

use serde::{Deserialize, Serialize};

use crate::enums::WaveOutcome;

/// What one `update()` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick number after this update.
    pub tick: u64,
    /// Confirmed kills this tick. Each kill consumed one bullet and one alien.
    pub kills: u32,
    /// Whether a bullet was fired this tick.
    pub fired: bool,
    /// Bullets that left the screen this tick.
    pub bullets_expired: u32,
    /// Whether the swarm reversed this tick.
    pub reversed: bool,
    pub aliens_remaining: u32,
    pub outcome: WaveOutcome,
}
