//! Core types and definitions for the invaders ECS.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, components, input and game events, constants, configuration,
//! errors, and the render-context boundary. It holds no simulation logic.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod render;
pub mod state;
pub mod types;

pub use glam::Vec2;

#[cfg(test)]
mod tests;
