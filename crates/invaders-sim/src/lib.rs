//! Runtime core for the invaders game.
//!
//! Owns the struct-of-arrays ECS world, runs the movement and collision
//! systems once per fixed tick, and renders through a caller-supplied
//! render context.

pub mod ecs;
pub mod engine;
pub mod systems;
pub mod timestep;
pub mod world_setup;

pub use engine::Coordinator;
pub use invaders_core as core;
