//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::CameraMode;

/// Currently-held input keys, refreshed by the host whenever they change.
/// The simulation only ever reads these as held true/false — key-repeat
/// semantics are the host's concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Melee attack (held).
    pub melee: bool,
    /// Laser attack (edge-triggered on hold while not already firing).
    pub laser: bool,
    /// Cat call (edge-triggered on hold while not already calling).
    pub call: bool,
    /// Orbit the chase camera counter-clockwise.
    pub orbit_left: bool,
    /// Orbit the chase camera clockwise.
    pub orbit_right: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new game (from the main menu).
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    /// Replace the held-key state.
    SetInput { input: InputState },

    /// Switch between chase and free camera.
    SetCameraMode { mode: CameraMode },
    /// Adjust the free-camera pose.
    SetFreeCamera {
        x: f64,
        y: f64,
        z: f64,
        look_x: f64,
        look_y: f64,
        look_z: f64,
    },

    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = paused).
    SetTimeScale { scale: f64 },
    /// Adjust the player's move speed (debug-panel tunable).
    SetMoveSpeed { speed: f64 },
    /// Viewport resized — recompute projection parameters only.
    SetViewport { width: u32, height: u32 },
}
