//! Hit resolution: bullets against aliens, then the wave outcome check.

use log::{debug, info};

use invaders_core::constants::ALIEN_SPEED_UP;
use invaders_core::enums::{EntityKind, WaveOutcome};
use invaders_core::types::Viewport;

use crate::ecs::{EntityId, SlotFreeList, World};

/// One confirmed hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kill {
    pub bullet: EntityId,
    pub alien: EntityId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Hits in resolution order (bullet ID order).
    pub kills: Vec<Kill>,
    pub outcome: WaveOutcome,
}

/// Resolve bullet hits and evaluate the wave outcome.
///
/// Each active bullet kills at most the first overlapping active alien in
/// ID order. Every kill deactivates both entities, returns the bullet slot
/// to `bullets`, and speeds up all aliens still alive.
pub fn run(world: &mut World, bullets: &mut SlotFreeList, viewport: Viewport) -> CollisionResult {
    world.sync_all_colliders();

    let mut kills = Vec::new();
    for i in 0..world.kind_ids(EntityKind::Bullet).len() {
        let bullet = world.kind_ids(EntityKind::Bullet)[i];
        if !world.is_active(bullet) {
            continue;
        }
        let bullet_rect = world.colliders[bullet.index()].rect;

        let hit = world
            .active_ids(EntityKind::Alien)
            .find(|alien| bullet_rect.overlaps(&world.colliders[alien.index()].rect));

        if let Some(alien) = hit {
            world.set_active(bullet, false);
            world.set_active(alien, false);
            bullets.release(bullet);
            increase_alien_speed(world);
            debug!("{bullet} killed {alien}");
            kills.push(Kill { bullet, alien });
        }
    }

    let outcome = evaluate_outcome(world, viewport);
    CollisionResult { kills, outcome }
}

/// Add the kill bonus to every active alien.
fn increase_alien_speed(world: &mut World) {
    for i in 0..world.kind_ids(EntityKind::Alien).len() {
        let id = world.kind_ids(EntityKind::Alien)[i];
        if world.is_active(id) {
            world.physics[id.index()].delta_velocity += ALIEN_SPEED_UP;
        }
    }
}

/// Terminal checks, in priority order: no aliens left, an alien on the tank,
/// an alien at the bottom of the screen. A tank that is hit is deactivated.
pub fn evaluate_outcome(world: &mut World, viewport: Viewport) -> WaveOutcome {
    if world.active_count(EntityKind::Alien) == 0 {
        return WaveOutcome::Cleared;
    }

    let tank = world.active_ids(EntityKind::Tank).next();
    if let Some(tank) = tank {
        let tank_rect = world.colliders[tank.index()].rect;
        let crushed = world
            .active_ids(EntityKind::Alien)
            .any(|alien| tank_rect.overlaps(&world.colliders[alien.index()].rect));
        if crushed {
            world.set_active(tank, false);
            info!("tank {tank} hit by the swarm");
            return WaveOutcome::PlayerHit;
        }
    }

    let landed = world
        .active_ids(EntityKind::Alien)
        .any(|alien| world.colliders[alien.index()].rect.bottom() >= viewport.height);
    if landed {
        return WaveOutcome::Overrun;
    }

    WaveOutcome::InProgress
}
