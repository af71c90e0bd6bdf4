//! Entity spawn factories for building a level.
//!
//! Creates the tank, the alien grid and the pool of inactive bullet slots.
//! Every entity a level will ever use exists after [`build_level`].

use glam::Vec2;

use invaders_core::components::*;
use invaders_core::config::CoreConfig;
use invaders_core::constants::*;
use invaders_core::enums::EntityKind;
use invaders_core::error::EcsError;
use invaders_core::types::Viewport;

use crate::ecs::{EntityId, PoolCapacities, SlotFreeList, World};

/// A freshly built level: the world and the free-list over its bullet slots.
pub struct Level {
    pub world: World,
    pub bullets: SlotFreeList,
}

/// Allocate and populate every store for one level.
pub fn build_level(config: &CoreConfig, viewport: Viewport) -> Result<Level, EcsError> {
    let alien = config.alien_count().ok_or(EcsError::CapacityOverflow)?;
    let mut world = World::new(PoolCapacities {
        alien,
        tank: 1,
        bullet: config.bullet_capacity,
    })?;

    spawn_alien_grid(&mut world, config.alien_rows, config.alien_columns)?;
    spawn_tank(&mut world, viewport)?;
    for _ in 0..config.bullet_capacity {
        spawn_bullet_slot(&mut world)?;
    }

    let bullets = SlotFreeList::new(world.kind_ids(EntityKind::Bullet));
    Ok(Level { world, bullets })
}

/// Spawn `rows`×`columns` aliens, row-major from the top-left.
pub fn spawn_alien_grid(world: &mut World, rows: usize, columns: usize) -> Result<(), EcsError> {
    let (origin_x, origin_y) = ALIEN_GRID_ORIGIN;
    let (spacing_x, spacing_y) = ALIEN_GRID_SPACING;
    for row in 0..rows {
        for col in 0..columns {
            let x = origin_x + col as f32 * spacing_x;
            let y = origin_y + row as f32 * spacing_y;
            spawn_alien(world, Vec2::new(x, y))?;
        }
    }
    Ok(())
}

pub fn spawn_alien(world: &mut World, position: Vec2) -> Result<EntityId, EcsError> {
    let id = world.spawn(
        EntityKind::Alien,
        Transform { position },
        Collider::sized(ALIEN_SIZE.0, ALIEN_SIZE.1),
        true,
    )?;
    // The swarm starts out heading right.
    world.physics[id.index()].velocity = Vec2::new(ALIEN_BASE_SPEED, 0.0);
    Ok(id)
}

/// The tank starts centered horizontally near the bottom of the screen.
pub fn spawn_tank(world: &mut World, viewport: Viewport) -> Result<EntityId, EcsError> {
    let x = viewport.width as f32 * 0.5;
    let y = viewport.height as f32 - TANK_BOTTOM_OFFSET;
    world.spawn(
        EntityKind::Tank,
        Transform::at(x, y),
        Collider::sized(TANK_SIZE.0, TANK_SIZE.1),
        true,
    )
}

/// Bullet slots start inactive and are activated by firing.
pub fn spawn_bullet_slot(world: &mut World) -> Result<EntityId, EcsError> {
    world.spawn(
        EntityKind::Bullet,
        Transform::default(),
        Collider::sized(BULLET_SIZE.0, BULLET_SIZE.1),
        false,
    )
}
