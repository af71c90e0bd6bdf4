//! Systems that operate on the ECS world each tick or frame.
//!
//! Movement keeps its own state (tank intent, swarm heading); collision and
//! render are plain functions over the world.

pub mod collision;
pub mod movement;
pub mod render;
