//! Boundary between the simulation and whatever draws it.
//!
//! The platform layer implements [`RenderContext`] on top of its renderer.
//! [`RecordingCanvas`] is an in-memory implementation that records every
//! call; tests and the headless runner use it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::error::PlatformError;
use crate::types::{Rect, Viewport};

/// Opaque handle to a texture owned by the render context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Drawing surface plus texture loader supplied by the platform layer.
pub trait RenderContext {
    /// Size of the visible play field.
    fn viewport(&self) -> Viewport;

    /// Acquire the texture used for every entity of `kind`.
    fn load_texture(&mut self, kind: EntityKind) -> Result<TextureId, PlatformError>;

    /// Give back a texture acquired with [`RenderContext::load_texture`].
    fn release_texture(&mut self, texture: TextureId);

    /// Fill the frame with the background color.
    fn clear(&mut self);

    /// Blit `texture` stretched over `rect`.
    fn draw_texture(&mut self, texture: TextureId, rect: Rect);

    /// Outline `rect` (debug overlay).
    fn draw_outline(&mut self, rect: Rect);
}

/// One recorded call on a [`RecordingCanvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCall {
    Clear,
    Texture { texture: TextureId, rect: Rect },
    Outline { rect: Rect },
}

/// Render context that records draw calls instead of drawing.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    viewport: Viewport,
    calls: Vec<DrawCall>,
    next_texture: u32,
    live_textures: HashSet<TextureId>,
    failing_kinds: HashSet<EntityKind>,
}

impl RecordingCanvas {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            calls: Vec::new(),
            next_texture: 0,
            live_textures: HashSet::new(),
            failing_kinds: HashSet::new(),
        }
    }

    /// Make every `load_texture` for `kind` fail.
    pub fn fail_texture(mut self, kind: EntityKind) -> Self {
        self.failing_kinds.insert(kind);
        self
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the canvas empty for the next frame.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Rectangles of the texture blits, in draw order.
    pub fn texture_rects(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Texture { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Textures loaded and not yet released.
    pub fn live_texture_count(&self) -> usize {
        self.live_textures.len()
    }
}

impl RenderContext for RecordingCanvas {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn load_texture(&mut self, kind: EntityKind) -> Result<TextureId, PlatformError> {
        if self.failing_kinds.contains(&kind) {
            return Err(PlatformError::TextureLoad {
                kind,
                reason: "texture creation disabled".to_string(),
            });
        }
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        self.live_textures.insert(id);
        Ok(id)
    }

    fn release_texture(&mut self, texture: TextureId) {
        self.live_textures.remove(&texture);
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn draw_texture(&mut self, texture: TextureId, rect: Rect) {
        self.calls.push(DrawCall::Texture { texture, rect });
    }

    fn draw_outline(&mut self, rect: Rect) {
        self.calls.push(DrawCall::Outline { rect });
    }
}
