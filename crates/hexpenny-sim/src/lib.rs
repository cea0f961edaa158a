//! Simulation engine for HEXPENNY.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod effects;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use hexpenny_core as core;

#[cfg(test)]
mod tests;
