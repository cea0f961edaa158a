//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub camera: CameraView,
    pub player: PlayerView,
    pub vampires: Vec<VampireView>,
    pub cats: Vec<CatView>,
    pub dog: DogView,
    pub particles: Vec<ParticleView>,
    pub laser_sources: Vec<LaserSourceView>,
    pub laser_beams: Vec<LaserBeamView>,
    pub laser_impacts: Vec<LaserImpactView>,
    pub call_pulses: Vec<CallPulseView>,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
}

/// Camera pose for the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub mode: CameraMode,
    pub position: Position,
    pub look_at: Position,
}

/// The player character with renderer-ready limb angles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    /// Facing yaw (radians around the vertical axis).
    pub yaw: f64,
    pub is_attacking: bool,
    pub is_laser_attacking: bool,
    pub is_calling_cats: bool,
    pub is_moving: bool,
    /// Right arm swing angle (large overhead arc while attacking).
    pub right_arm_angle: f64,
    /// Left arm swing angle.
    pub left_arm_angle: f64,
    /// Broom prop tilt, raised while attacking.
    pub broom_tilt: f64,
    /// Leg swing while walking.
    pub leg_swing: f64,
}

/// A vampire on the arena floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VampireView {
    /// Stable entity id for the renderer's object pool.
    pub id: u32,
    pub position: Position,
    pub yaw: f64,
    pub phase: VampirePhase,
    /// Limb swing angle while wandering.
    pub limb_swing: f64,
}

/// A money cat, including its rescue float/fade timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatView {
    pub id: u32,
    pub position: Position,
    pub yaw: f64,
    pub phase: CatPhase,
    /// Extra height above the base position once rescued (0 while alive).
    pub float_height: f64,
    /// Render opacity: fades 1 -> 0 across the rescue timeline.
    pub opacity: f64,
    pub money_value: u32,
}

/// The dog companion with its full animation pose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DogView {
    pub position: Position,
    pub yaw: f64,
    pub mode: DogMode,
    /// Vertical body bob offset.
    pub bob: f64,
    /// Tail wag angle (faster and wider while hunting).
    pub tail_angle: f64,
    /// Leg swing angle.
    pub leg_angle: f64,
    /// Head tilt, applied intermittently while idle.
    pub head_tilt: f64,
}

/// A short-lived visual particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub kind: ParticleKind,
}

/// The muzzle glow left at the player's launch position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserSourceView {
    pub position: Position,
    /// Age fraction (0.0 fresh, 1.0 about to be removed).
    pub age: f64,
}

/// A laser beam in flight from the player toward a vampire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserBeamView {
    pub start: Position,
    /// Current head of the beam, lerped from start toward the target.
    pub head: Position,
    pub target: Position,
    /// Travel progress (0.0 at launch, 1.0 on arrival).
    pub progress: f64,
}

/// An impact flash where a beam arrived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserImpactView {
    pub position: Position,
    /// Age fraction (0.0 fresh, 1.0 about to be removed).
    pub age: f64,
}

/// An expanding ring around the player from a cat call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallPulseView {
    pub center: Position,
    /// Expansion progress (0.0 - 1.0); the renderer maps this to radius.
    pub progress: f64,
    /// Render opacity, fading as the ring expands.
    pub opacity: f64,
}

/// Heads-up display values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub money_points: u32,
    /// Whether the melee attack is currently held.
    pub attack_mode_on: bool,
    pub active_vampire_count: u32,
    pub saved_cat_count: u32,
}
