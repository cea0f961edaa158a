//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{CatPhase, DogMode, ParticleKind, VampirePhase};
use crate::types::Velocity;

/// Facing yaw (radians) around the vertical axis.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading {
    pub yaw: f64,
}

/// Player attack/call state and animation clock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerState {
    /// Melee flag — a direct, level-triggered reflection of the held key.
    pub is_attacking: bool,
    /// Busy flag set by a laser attack; cleared when all laser records finish.
    pub is_laser_attacking: bool,
    /// Busy flag set by a cat call; cleared at `call_until_tick`.
    pub is_calling_cats: bool,
    /// Tick at which the calling flag auto-clears.
    pub call_until_tick: u64,
    /// Tick of the most recent laser activation.
    pub last_laser_tick: u64,
    /// Whether any movement input was applied this tick.
    pub is_moving: bool,
    /// Accumulating animation clock driving limb poses.
    pub anim_time: f64,
}

/// Per-vampire wander state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VampireState {
    pub phase: VampirePhase,
    /// Current wander direction on the ground plane (unit vector).
    pub direction: DVec2,
    /// Wander speed (units per tick), resampled at each re-heading.
    pub speed: f64,
    /// Tick at which a new random heading is due.
    pub next_turn_tick: u64,
    /// Accumulating animation clock for limb swing.
    pub anim_time: f64,
}

/// Per-cat behavior state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatState {
    pub phase: CatPhase,
    /// Tick at which the cat was rescued (meaningful only once Saved).
    pub saved_at_tick: u64,
    /// Move speed (units per tick), randomized at creation.
    pub move_speed: f64,
    /// Player distance below which the cat flees, randomized at creation.
    pub scared_distance: f64,
    /// Money awarded on rescue.
    pub money_value: u32,
}

/// Dog companion state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DogState {
    /// Behavior mode, re-evaluated every tick.
    pub mode: DogMode,
    /// Follow point trailing behind the player, recomputed every tick.
    pub target_x: f64,
    pub target_z: f64,
    /// Accumulating animation clock (also drives the orbit phase).
    pub anim_time: f64,
}

/// Short-lived visual particle (explosion debris or rescue sparkle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub kind: ParticleKind,
    pub velocity: Velocity,
    /// Per-tick vertical acceleration (positive pulls downward).
    pub gravity: f64,
    /// Tick after which the particle is removed regardless of height.
    pub expires_at_tick: Option<u64>,
}

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a vampire entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vampire;

/// Marks a money cat entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoneyCat;

/// Marks the dog companion entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dog;
