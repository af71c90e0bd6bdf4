//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The three kinds of entity the game knows about. Each kind owns a
/// contiguous ID range, allocated in the order of [`EntityKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Alien,
    Tank,
    Bullet,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Alien, EntityKind::Tank, EntityKind::Bullet];

    /// Position of this kind in [`EntityKind::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            EntityKind::Alien => 0,
            EntityKind::Tank => 1,
            EntityKind::Bullet => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Alien => "alien",
            EntityKind::Tank => "tank",
            EntityKind::Bullet => "bullet",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal movement intent or heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalDirection {
    Left,
    #[default]
    Still,
    Right,
}

impl HorizontalDirection {
    /// -1, 0 or +1 along the x axis.
    pub fn sign(self) -> f32 {
        match self {
            HorizontalDirection::Left => -1.0,
            HorizontalDirection::Still => 0.0,
            HorizontalDirection::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            HorizontalDirection::Left => HorizontalDirection::Right,
            HorizontalDirection::Still => HorizontalDirection::Still,
            HorizontalDirection::Right => HorizontalDirection::Left,
        }
    }
}

/// Result of the current wave, evaluated after every collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveOutcome {
    #[default]
    InProgress,
    /// Every alien is dead.
    Cleared,
    /// An alien touched the tank.
    PlayerHit,
    /// An alien reached the bottom of the screen.
    Overrun,
}

impl WaveOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, WaveOutcome::InProgress)
    }
}

/// Lifecycle of the ECS coordinator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinatorState {
    #[default]
    Uninitialized,
    Running,
    Terminated,
}

impl std::fmt::Display for CoordinatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CoordinatorState::Uninitialized => "uninitialized",
            CoordinatorState::Running => "running",
            CoordinatorState::Terminated => "terminated",
        };
        f.write_str(name)
    }
}
