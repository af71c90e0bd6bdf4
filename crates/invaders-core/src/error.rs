//! Error taxonomy for the ECS core and its platform boundary.

use thiserror::Error;

use crate::enums::{CoordinatorState, EntityKind};

/// Errors raised by the ECS itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// The ID range reserved for `kind` has no unused slot left.
    #[error("no free {kind} slot (capacity {capacity})")]
    CapacityExhausted { kind: EntityKind, capacity: usize },

    /// Requested capacities do not fit in the entity ID space.
    #[error("entity capacity exceeds the u32 ID space")]
    CapacityOverflow,

    /// An ID outside every range, or one whose Active flag is false.
    #[error("entity {0} is out of range or inactive")]
    InvalidEntity(u32),

    /// A coordinator method was called in the wrong lifecycle state.
    #[error("cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: CoordinatorState,
    },
}

/// Failures reported by the platform layer behind a render context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("failed to load {kind} texture: {reason}")]
    TextureLoad { kind: EntityKind, reason: String },
}
