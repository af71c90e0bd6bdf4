//! Raw input events handed in by the platform layer.
//!
//! The platform maps its own key codes onto [`Key`]; anything it does not
//! map is never forwarded.

use serde::{Deserialize, Serialize};

/// Game keys the core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Fire,
}

/// A single key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "key")]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}
