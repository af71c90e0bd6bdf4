//! Fundamental geometric types.
//!
//! Simulation state is kept in floating point (`Vec2`, entity centers);
//! everything that lands on screen (colliders, draw rectangles) is snapped to
//! whole pixels.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::constants::TOUCHING_EDGES_OVERLAP;

/// Axis-aligned rectangle in screen pixels. `(x, y)` is the top-left corner,
/// y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Visible play field. The origin is always (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` whose center is `center`, snapped to pixels.
    pub fn centered_on(center: Vec2, w: i32, h: i32) -> Self {
        let corner = top_left_point(center, w, h);
        Self::new(corner.x, corner.y, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Axis-aligned intersection test.
    ///
    /// Rectangles that only share an edge are governed by
    /// [`TOUCHING_EDGES_OVERLAP`]. The test is symmetric in its arguments.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if TOUCHING_EDGES_OVERLAP {
            self.left() <= other.right()
                && other.left() <= self.right()
                && self.top() <= other.bottom()
                && other.top() <= self.bottom()
        } else {
            self.left() < other.right()
                && other.left() < self.right()
                && self.top() < other.bottom()
                && other.top() < self.bottom()
        }
    }
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// True when `rect` has no pixel inside the viewport.
    pub fn is_outside(&self, rect: &Rect) -> bool {
        rect.bottom() <= 0 || rect.top() >= self.height || rect.right() <= 0 || rect.left() >= self.width
    }
}

/// Top-left pixel of a `width`×`height` box centered on `position`.
/// Halves are rounded away from zero.
pub fn top_left_point(position: Vec2, width: i32, height: i32) -> IVec2 {
    let offset_x = width as f32 * 0.5;
    let offset_y = height as f32 * 0.5;
    IVec2::new(
        (position.x - offset_x).round() as i32,
        (position.y - offset_y).round() as i32,
    )
}
