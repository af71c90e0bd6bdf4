//! Sprite rendering with interpolation between fixed steps.
//!
//! Read-only over the world; the only side effects are calls on the render
//! context.

use invaders_core::render::RenderContext;
use invaders_core::types::{top_left_point, Rect};

use crate::ecs::{EntityId, World};

/// Draw rectangle for an active entity.
///
/// With a positive `delay` the entity is extrapolated along its velocity by
/// that fraction of a tick; otherwise (zero, negative or NaN) the collider is
/// used unchanged.
pub fn draw_rect(world: &World, id: EntityId, delay: f32) -> Rect {
    let idx = id.index();
    let collider = world.colliders[idx].rect;
    if delay > 0.0 {
        let position = world.transforms[idx].position + world.physics[idx].velocity * delay;
        let corner = top_left_point(position, collider.w, collider.h);
        Rect::new(corner.x, corner.y, collider.w, collider.h)
    } else {
        collider
    }
}

/// Clear the frame and draw every active, visible entity in pool order.
/// With `debug_colliders` set, outline each active collider afterwards.
pub fn run(world: &World, ctx: &mut dyn RenderContext, delay: f32, debug_colliders: bool) {
    ctx.clear();

    for &id in world.all_ids() {
        if !world.is_active(id) {
            continue;
        }
        let Some(texture) = world.sprites[id.index()].texture else {
            continue;
        };
        ctx.draw_texture(texture, draw_rect(world, id, delay));
    }

    if debug_colliders {
        for &id in world.all_ids() {
            if world.is_active(id) {
                ctx.draw_outline(world.colliders[id.index()].rect);
            }
        }
    }
}
