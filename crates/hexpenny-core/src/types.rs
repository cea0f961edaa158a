//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D position in world space (scene units, Cartesian).
/// x = East, y = Up, z = South (toward the default camera).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in world space (units per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Axis-aligned playable rectangle on the ground plane (y = 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance to another position (3D).
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Ground-plane distance (ignoring height).
    pub fn ground_distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Yaw toward another position (radians, atan2(dx, dz) — matches the
    /// renderer's y-rotation convention where yaw 0 faces +z).
    pub fn yaw_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        dx.atan2(dz)
    }

    /// Linear interpolation toward another position.
    pub fn lerp(&self, other: &Position, t: f64) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

impl Arena {
    /// Symmetric arena covering ±`half_extent` on both ground axes.
    pub fn centered(half_extent: f64) -> Self {
        Self {
            min_x: -half_extent,
            max_x: half_extent,
            min_z: -half_extent,
            max_z: half_extent,
        }
    }

    /// Clamp a ground-plane point into the arena.
    pub fn clamp(&self, x: f64, z: f64) -> (f64, f64) {
        (x.clamp(self.min_x, self.max_x), z.clamp(self.min_z, self.max_z))
    }

    /// Whether a ground-plane point lies inside (or on the edge of) the arena.
    pub fn contains(&self, x: f64, z: f64) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    /// Whether a point sits on the min/max x edge (used for wander bounce).
    pub fn on_x_edge(&self, x: f64) -> bool {
        x <= self.min_x || x >= self.max_x
    }

    /// Whether a point sits on the min/max z edge.
    pub fn on_z_edge(&self, z: f64) -> bool {
        z <= self.min_z || z >= self.max_z
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::centered(crate::constants::ARENA_HALF_EXTENT)
    }
}
