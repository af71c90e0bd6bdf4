//! Component types stored in the parallel arrays of the ECS world.
//!
//! Components are plain data structs. Game logic lives in systems.
//! The Active flag is a bare `bool` store and has no struct here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::render::TextureId;
use crate::types::Rect;

/// Entity center in screen space. Ground truth for position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
}

/// Per-tick motion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    /// Displacement applied on the next tick (pixels per tick).
    pub velocity: Vec2,
    /// Speed bonus accumulated from kills. Only aliens use it.
    pub delta_velocity: f32,
}

/// Screen-space bounding box. Derived from [`Transform`] every tick,
/// never written by anything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collider {
    pub rect: Rect,
}

/// Renderable image. `None` means the entity is not drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub texture: Option<TextureId>,
}

impl Transform {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }
}

impl Collider {
    /// Zero-positioned collider of the given size; the world fills in the
    /// position on the first sync.
    pub fn sized(w: i32, h: i32) -> Self {
        Self {
            rect: Rect::new(0, 0, w, h),
        }
    }

    /// Recenter on `position`, keeping the size.
    pub fn sync_to(&mut self, position: Vec2) {
        self.rect = Rect::centered_on(position, self.rect.w, self.rect.h);
    }
}
