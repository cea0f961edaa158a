//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
}

/// Camera behavior mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Smoothed chase camera behind the player.
    #[default]
    Follow,
    /// Fixed pose taken from configuration.
    Free,
}

/// Vampire behavior phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VampirePhase {
    /// Random walk inside the arena.
    #[default]
    Wandering,
    /// Terminal — excluded from AI, collisions, and active counts.
    Exploded,
}

/// Money cat behavior phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatPhase {
    /// Slow drift with occasional random turns.
    #[default]
    Roaming,
    /// Running directly away from the player.
    Fleeing,
    /// Running directly toward the player in answer to a call.
    Called,
    /// Terminal — rescued, playing the float/fade timeline.
    Saved,
}

/// Dog behavior mode, re-evaluated every tick from the player's attack flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DogMode {
    /// Trailing the follow point behind the player.
    #[default]
    Follow,
    /// Chasing the nearest live vampire.
    Hunt,
    /// Orbiting the player when no vampire is in range.
    Circle,
}

/// What a particle represents (affects its motion and culling).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Explosion debris: falls under gravity, culled below ground.
    #[default]
    Debris,
    /// Rescue sparkle: drifts upward, culled at its expiry tick.
    Sparkle,
}
