//! Tunable game configuration.
//!
//! Every knob the original exposed through its debug panel, plus the RNG
//! seed and time scale. Defaults mirror `constants`; nothing here is
//! persisted — the host supplies a config at engine construction.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Arena;

/// Configuration for starting a new game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,

    /// Playable ground rectangle.
    pub arena: Arena,
    /// Half-extent of the random placement region.
    pub spawn_half_extent: f64,
    /// Minimum placement distance from the player.
    pub spawn_min_player_distance: f64,

    /// Player move speed (units per tick).
    pub player_move_speed: f64,
    /// Starting money points.
    pub starting_money: u32,

    /// Vampires at game start.
    pub initial_vampire_count: u32,
    /// Population cap on live vampires.
    pub vampire_cap: u32,
    /// Minimum ticks between spawns.
    pub vampire_spawn_interval_ticks: u64,

    /// Cats at game start.
    pub initial_cat_count: u32,

    /// Dog follow point distance behind the player.
    pub dog_follow_distance: f64,
    /// Dog base speed (units per tick).
    pub dog_follow_speed: f64,

    /// Money per vampire kill.
    pub kill_reward: u32,
    /// Money lost to a vampire touch while not attacking.
    pub vampire_penalty: u32,

    /// Chase camera distance behind the player.
    pub camera_distance: f64,
    /// Chase camera height.
    pub camera_height: f64,
    /// Camera interpolation factor per tick.
    pub camera_smoothness: f64,
    /// Player yaw change per tick from the camera-orbit keys.
    pub camera_rotation_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            arena: Arena::default(),
            spawn_half_extent: SPAWN_HALF_EXTENT,
            spawn_min_player_distance: SPAWN_MIN_PLAYER_DISTANCE,
            player_move_speed: PLAYER_MOVE_SPEED,
            starting_money: STARTING_MONEY,
            initial_vampire_count: INITIAL_VAMPIRE_COUNT,
            vampire_cap: VAMPIRE_CAP,
            vampire_spawn_interval_ticks: VAMPIRE_SPAWN_INTERVAL_TICKS,
            initial_cat_count: INITIAL_CAT_COUNT,
            dog_follow_distance: DOG_FOLLOW_DISTANCE,
            dog_follow_speed: DOG_FOLLOW_SPEED,
            kill_reward: KILL_REWARD,
            vampire_penalty: VAMPIRE_PENALTY,
            camera_distance: CAMERA_DISTANCE,
            camera_height: CAMERA_HEIGHT,
            camera_smoothness: CAMERA_SMOOTHNESS,
            camera_rotation_speed: CAMERA_ROTATION_SPEED,
        }
    }
}
