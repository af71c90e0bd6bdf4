//! Movement system.
//!
//! Advances the tank from player intent, the alien swarm with its shared
//! sweep-and-drop state, and every live bullet. Also fires new bullets from
//! the pooled slots.

use glam::Vec2;
use log::{debug, warn};

use invaders_core::components::Physics;
use invaders_core::constants::*;
use invaders_core::enums::{EntityKind, HorizontalDirection};
use invaders_core::input::{InputEvent, Key};
use invaders_core::types::{Rect, Viewport};

use crate::ecs::{EntityId, SlotFreeList, World};

/// Player intent, built from raw key transitions.
#[derive(Debug, Clone, Default)]
pub struct TankController {
    left_held: bool,
    right_held: bool,
    /// Most recently pressed direction; wins while both keys are held.
    last_pressed: HorizontalDirection,
    fire_pending: bool,
    cooldown: u32,
}

impl TankController {
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Left) => {
                self.left_held = true;
                self.last_pressed = HorizontalDirection::Left;
            }
            InputEvent::KeyDown(Key::Right) => {
                self.right_held = true;
                self.last_pressed = HorizontalDirection::Right;
            }
            InputEvent::KeyUp(Key::Left) => self.left_held = false,
            InputEvent::KeyUp(Key::Right) => self.right_held = false,
            InputEvent::KeyDown(Key::Fire) => self.fire_pending = true,
            InputEvent::KeyUp(Key::Fire) => {}
        }
    }

    /// Direction the tank moves on the next tick.
    pub fn direction(&self) -> HorizontalDirection {
        match (self.left_held, self.right_held) {
            (true, false) => HorizontalDirection::Left,
            (false, true) => HorizontalDirection::Right,
            (true, true) => self.last_pressed,
            (false, false) => HorizontalDirection::Still,
        }
    }

    pub fn fire_pending(&self) -> bool {
        self.fire_pending
    }

    /// Ticks left before the tank may fire again.
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }
}

/// Heading and pending drop shared by the whole swarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwarmState {
    pub direction: HorizontalDirection,
    /// Set on reversal; the next position update steps down instead of
    /// sideways.
    pub pending_drop: bool,
}

impl Default for SwarmState {
    fn default() -> Self {
        Self {
            direction: HorizontalDirection::Right,
            pending_drop: false,
        }
    }
}

/// What one movement pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementReport {
    pub fired: Option<EntityId>,
    pub reversed: bool,
    /// Bullets deactivated for leaving the screen.
    pub bullets_expired: u32,
}

/// Owns the tank intent and the swarm state.
#[derive(Debug, Clone)]
pub struct MovementSystem {
    viewport: Viewport,
    tank: TankController,
    swarm: SwarmState,
}

impl MovementSystem {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            tank: TankController::default(),
            swarm: SwarmState::default(),
        }
    }

    pub fn input(&mut self, event: InputEvent) {
        self.tank.handle(event);
    }

    pub fn tank(&self) -> &TankController {
        &self.tank
    }

    pub fn swarm(&self) -> SwarmState {
        self.swarm
    }

    #[cfg(test)]
    pub fn swarm_mut(&mut self) -> &mut SwarmState {
        &mut self.swarm
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// One simulation tick of movement.
    pub fn run(&mut self, world: &mut World, bullets: &mut SlotFreeList) -> MovementReport {
        let reversed = self.update_swarm_direction(world);
        self.update_swarm_position(world);
        self.update_tank(world);
        let bullets_expired = self.update_bullets(world, bullets);
        let fired = self.fire(world, bullets);
        MovementReport {
            fired,
            reversed,
            bullets_expired,
        }
    }

    /// Reverse the swarm when an active alien reaches the edge it is heading
    /// toward. Returns true on reversal.
    pub fn update_swarm_direction(&mut self, world: &mut World) -> bool {
        world.sync_colliders(EntityKind::Alien);

        let width = self.viewport.width;
        let direction = self.swarm.direction;
        let at_edge = world.active_ids(EntityKind::Alien).any(|id| {
            let rect = world.colliders[id.index()].rect;
            match direction {
                HorizontalDirection::Right => rect.right() >= width,
                HorizontalDirection::Left => rect.left() <= 0,
                HorizontalDirection::Still => false,
            }
        });

        if at_edge {
            self.swarm.direction = direction.reversed();
            self.swarm.pending_drop = true;
            debug!("swarm reversed, now heading {:?}", self.swarm.direction);
        }
        at_edge
    }

    /// Move every active alien: one drop step after a reversal, otherwise
    /// sideways at base speed plus its accumulated bonus.
    pub fn update_swarm_position(&mut self, world: &mut World) {
        let sign = self.swarm.direction.sign();
        let dropping = std::mem::take(&mut self.swarm.pending_drop);

        for i in 0..world.kind_ids(EntityKind::Alien).len() {
            let id = world.kind_ids(EntityKind::Alien)[i];
            if !world.is_active(id) {
                continue;
            }
            let idx = id.index();
            let physics = &mut world.physics[idx];
            physics.velocity = Vec2::new(sign * (ALIEN_BASE_SPEED + physics.delta_velocity), 0.0);

            let position = &mut world.transforms[idx].position;
            if dropping {
                position.y += ALIEN_DROP_STEP;
            } else {
                *position += world.physics[idx].velocity;
            }
            world.sync_collider(id);
        }
    }

    /// Velocity from intent, then clamp so the collider stays on screen.
    pub fn update_tank(&mut self, world: &mut World) {
        self.tank.cooldown = self.tank.cooldown.saturating_sub(1);

        let Some(id) = world.active_ids(EntityKind::Tank).next() else {
            return;
        };
        let idx = id.index();
        let half_width = world.colliders[idx].rect.w as f32 * 0.5;
        let min_x = half_width;
        let max_x = (self.viewport.width as f32 - half_width).max(min_x);

        let physics: &mut Physics = &mut world.physics[idx];
        physics.velocity = Vec2::new(self.tank.direction().sign() * TANK_SPEED, 0.0);

        let position = &mut world.transforms[idx].position;
        let target = *position + physics.velocity;
        let clamped = target.x.clamp(min_x, max_x);
        if clamped != target.x {
            // Pinned against a wall.
            physics.velocity.x = 0.0;
        }
        *position = Vec2::new(clamped, target.y);
        world.sync_collider(id);
    }

    /// Advance live bullets; bullets that leave the screen are deactivated
    /// and their slots released.
    pub fn update_bullets(&mut self, world: &mut World, bullets: &mut SlotFreeList) -> u32 {
        let mut expired = 0;
        for i in 0..world.kind_ids(EntityKind::Bullet).len() {
            let id = world.kind_ids(EntityKind::Bullet)[i];
            if !world.is_active(id) {
                continue;
            }
            let idx = id.index();
            let velocity = world.physics[idx].velocity;
            world.transforms[idx].position += velocity;
            world.sync_collider(id);

            if self.viewport.is_outside(&world.colliders[idx].rect) {
                world.set_active(id, false);
                bullets.release(id);
                expired += 1;
            }
        }
        expired
    }

    /// Consume the fire latch and launch a bullet from the tank's muzzle.
    /// Shots during cooldown or with an empty pool are dropped.
    pub fn fire(&mut self, world: &mut World, bullets: &mut SlotFreeList) -> Option<EntityId> {
        if !std::mem::take(&mut self.tank.fire_pending) {
            return None;
        }
        if self.tank.cooldown > 0 {
            debug!("shot dropped, cooldown {} ticks", self.tank.cooldown);
            return None;
        }
        let tank = world.active_ids(EntityKind::Tank).next()?;
        let Some(bullet) = bullets.acquire() else {
            warn!("bullet pool exhausted, shot dropped");
            return None;
        };

        let muzzle = muzzle_position(
            world.transforms[tank.index()].position,
            world.colliders[tank.index()].rect,
        );
        let idx = bullet.index();
        world.transforms[idx].position = muzzle;
        world.physics[idx] = Physics {
            velocity: Vec2::new(0.0, -BULLET_SPEED),
            delta_velocity: 0.0,
        };
        world.set_active(bullet, true);
        world.sync_collider(bullet);

        self.tank.cooldown = BULLET_COOLDOWN_TICKS;
        debug!("fired {bullet} from {muzzle}");
        Some(bullet)
    }
}

/// Bullet center that puts the bullet's bottom edge on the tank's top edge.
pub fn muzzle_position(tank_position: Vec2, tank_rect: Rect) -> Vec2 {
    Vec2::new(
        tank_position.x,
        tank_rect.top() as f32 - BULLET_SIZE.1 as f32 * 0.5,
    )
}
