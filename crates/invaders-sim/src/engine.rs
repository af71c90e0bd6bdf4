//! ECS coordinator: the facade the game loop talks to.
//!
//! `Coordinator` owns every store, the bullet free-list and the systems.
//! The external loop calls `initialize` once, then per frame `input` for
//! each event, `update` zero or more times and `render` once, and finally
//! `terminate`. Completely headless apart from the render context it is
//! handed, enabling deterministic testing.

use log::{info, warn};

use invaders_core::config::CoreConfig;
use invaders_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use invaders_core::enums::{CoordinatorState, EntityKind, WaveOutcome};
use invaders_core::error::EcsError;
use invaders_core::events::GameEvent;
use invaders_core::input::InputEvent;
use invaders_core::render::{RenderContext, TextureId};
use invaders_core::state::TickReport;
use invaders_core::types::Viewport;

use crate::ecs::{SlotFreeList, World};
use crate::systems;
use crate::systems::movement::MovementSystem;
use crate::world_setup::{self, Level};

pub struct Coordinator {
    config: CoreConfig,
    state: CoordinatorState,
    world: World,
    bullets: SlotFreeList,
    movement: MovementSystem,
    /// Textures acquired at initialization, released on terminate.
    textures: Vec<TextureId>,
    tick: u64,
    outcome: WaveOutcome,
    pending_events: Vec<GameEvent>,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(CoreConfig::default())
    }
}

impl Coordinator {
    /// An uninitialized coordinator. Stores are empty until `initialize`.
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            state: CoordinatorState::Uninitialized,
            world: World::default(),
            bullets: SlotFreeList::default(),
            movement: MovementSystem::new(Viewport::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            textures: Vec::new(),
            tick: 0,
            outcome: WaveOutcome::InProgress,
            pending_events: Vec::new(),
        }
    }

    /// Build the level for the context's viewport and load sprite textures.
    ///
    /// A texture that fails to load is logged and its kind stays invisible;
    /// the simulation runs regardless.
    pub fn initialize(&mut self, ctx: &mut dyn RenderContext) -> Result<(), EcsError> {
        if self.state != CoordinatorState::Uninitialized {
            return Err(EcsError::InvalidState {
                operation: "initialize",
                state: self.state,
            });
        }

        let viewport = ctx.viewport();
        let Level { world, bullets } = world_setup::build_level(&self.config, viewport)?;
        self.world = world;
        self.bullets = bullets;
        self.movement = MovementSystem::new(viewport);

        for kind in EntityKind::ALL {
            match ctx.load_texture(kind) {
                Ok(texture) => {
                    self.textures.push(texture);
                    self.world.set_kind_sprite(kind, Some(texture));
                }
                Err(e) => warn!("{e}; {kind} entities will not be drawn"),
            }
        }

        self.state = CoordinatorState::Running;
        info!(
            "initialized {}x{} level: {} aliens, {} bullet slots",
            viewport.width,
            viewport.height,
            self.world.kind_ids(EntityKind::Alien).len(),
            self.bullets.capacity()
        );
        Ok(())
    }

    /// Forward a raw input event to the tank controller.
    pub fn input(&mut self, event: InputEvent) -> Result<(), EcsError> {
        self.require_running("input")?;
        self.movement.input(event);
        Ok(())
    }

    /// Run one fixed simulation tick: movement, then collision.
    ///
    /// Once the wave has a terminal outcome the world is frozen and further
    /// calls only report that outcome.
    pub fn update(&mut self) -> Result<TickReport, EcsError> {
        self.require_running("update")?;
        if self.outcome.is_terminal() {
            return Ok(self.report());
        }

        let moved = self.movement.run(&mut self.world, &mut self.bullets);
        let collided =
            systems::collision::run(&mut self.world, &mut self.bullets, self.movement.viewport());
        self.tick += 1;

        if let Some(bullet) = moved.fired {
            self.pending_events.push(GameEvent::BulletFired {
                bullet: bullet.0,
                position: self.world.transforms[bullet.index()].position,
                tick: self.tick,
            });
        }
        if moved.reversed {
            self.pending_events.push(GameEvent::SwarmReversed {
                direction: self.movement.swarm().direction,
                tick: self.tick,
            });
        }
        for kill in &collided.kills {
            self.pending_events.push(GameEvent::AlienKilled {
                alien: kill.alien.0,
                bullet: kill.bullet.0,
                tick: self.tick,
            });
        }
        if collided.outcome.is_terminal() {
            self.outcome = collided.outcome;
            info!("wave ended at tick {}: {:?}", self.tick, self.outcome);
            self.pending_events.push(GameEvent::WaveEnded {
                outcome: self.outcome,
                tick: self.tick,
            });
        }

        Ok(TickReport {
            kills: collided.kills.len() as u32,
            fired: moved.fired.is_some(),
            bullets_expired: moved.bullets_expired,
            reversed: moved.reversed,
            ..self.report()
        })
    }

    /// Draw the current state, extrapolated `delay` ticks ahead.
    pub fn render(&self, ctx: &mut dyn RenderContext, delay: f32) -> Result<(), EcsError> {
        self.require_running("render")?;
        systems::render::run(&self.world, ctx, delay, self.config.debug_colliders);
        Ok(())
    }

    /// Release every texture and stop. No other call is valid afterwards.
    pub fn terminate(&mut self, ctx: &mut dyn RenderContext) -> Result<(), EcsError> {
        self.require_running("terminate")?;
        for texture in self.textures.drain(..) {
            ctx.release_texture(texture);
        }
        for kind in EntityKind::ALL {
            self.world.set_kind_sprite(kind, None);
        }
        self.state = CoordinatorState::Terminated;
        info!("terminated after {} ticks", self.tick);
        Ok(())
    }

    /// Take the events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn state(&self) -> CoordinatorState {
        self.state
    }

    pub fn outcome(&self) -> WaveOutcome {
        self.outcome
    }

    /// Number of completed simulation ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn bullets(&self) -> &SlotFreeList {
        &self.bullets
    }

    pub fn movement(&self) -> &MovementSystem {
        &self.movement
    }

    /// Mutable world access for scenario setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Activate a pooled bullet at `position` with `velocity` (for tests
    /// that need a bullet somewhere other than the muzzle).
    #[cfg(test)]
    pub fn place_test_bullet(
        &mut self,
        position: glam::Vec2,
        velocity: glam::Vec2,
    ) -> Option<crate::ecs::EntityId> {
        let id = self.bullets.acquire()?;
        self.world.transforms[id.index()].position = position;
        self.world.physics[id.index()].velocity = velocity;
        self.world.set_active(id, true);
        self.world.sync_collider(id);
        Some(id)
    }

    fn report(&self) -> TickReport {
        TickReport {
            tick: self.tick,
            aliens_remaining: self.world.active_count(EntityKind::Alien) as u32,
            outcome: self.outcome,
            ..TickReport::default()
        }
    }

    fn require_running(&self, operation: &'static str) -> Result<(), EcsError> {
        if self.state == CoordinatorState::Running {
            Ok(())
        } else {
            Err(EcsError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }
}
