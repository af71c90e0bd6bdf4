//! Events emitted by the simulation for audio and UI feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Discrete things that happened during a tick, drained by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A bullet slot was activated at the tank's muzzle.
    BulletFired { bullet: u32, position: Vec2, tick: u64 },
    /// A bullet destroyed an alien.
    AlienKilled { alien: u32, bullet: u32, tick: u64 },
    /// The swarm hit a side of the screen and turned around.
    SwarmReversed {
        direction: HorizontalDirection,
        tick: u64,
    },
    /// The wave reached a terminal outcome.
    WaveEnded { outcome: WaveOutcome, tick: u64 },
}
