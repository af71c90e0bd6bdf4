//! Struct-of-arrays entity storage.

pub mod entity;
pub mod world;

pub use entity::{EntityId, EntityPool, PoolCapacities, SlotFreeList};
pub use world::World;
