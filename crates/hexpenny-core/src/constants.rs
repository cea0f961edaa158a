//! Simulation constants and tuning parameters.
//!
//! Durations are expressed in ticks at the fixed tick rate. Speeds are
//! scene units per tick (the game was tuned frame-by-frame at display rate,
//! so per-tick distances are the authoritative values).

/// Simulation tick rate (Hz), one tick per display frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Half-extent of the playable ground square (±50 on x and z).
pub const ARENA_HALF_EXTENT: f64 = 50.0;

/// Half-extent of the random spawn region (inset from the arena edge).
pub const SPAWN_HALF_EXTENT: f64 = 40.0;

/// Minimum spawn distance from the player.
pub const SPAWN_MIN_PLAYER_DISTANCE: f64 = 10.0;

/// Placement resampling attempts before falling back to a fixed spot.
pub const SPAWN_MAX_ATTEMPTS: u32 = 32;

// --- Player ---

/// Player move speed (units per tick).
pub const PLAYER_MOVE_SPEED: f64 = 0.2;

/// Player animation clock increment per tick.
pub const PLAYER_ANIM_RATE: f64 = 0.2;

/// Starting money points.
pub const STARTING_MONEY: u32 = 100;

// --- Camera ---

/// Chase camera distance behind the player.
pub const CAMERA_DISTANCE: f64 = 11.0;

/// Chase camera height above the ground.
pub const CAMERA_HEIGHT: f64 = 8.0;

/// Camera interpolation factor per tick (lower = smoother).
pub const CAMERA_SMOOTHNESS: f64 = 0.05;

/// Player yaw change per tick while an arrow key is held.
pub const CAMERA_ROTATION_SPEED: f64 = 0.05;

// --- Vampires ---

/// Vampires present at game start.
pub const INITIAL_VAMPIRE_COUNT: u32 = 10;

/// Maximum simultaneous non-exploded vampires.
pub const VAMPIRE_CAP: u32 = 10;

/// Minimum ticks between vampire spawns (10 seconds).
pub const VAMPIRE_SPAWN_INTERVAL_TICKS: u64 = 10 * TICK_RATE as u64;

/// Wander speed range (units per tick).
pub const VAMPIRE_SPEED_MIN: f64 = 0.01;
pub const VAMPIRE_SPEED_MAX: f64 = 0.03;

/// Ticks between random re-headings (3–7 seconds).
pub const VAMPIRE_TURN_MIN_TICKS: u64 = 3 * TICK_RATE as u64;
pub const VAMPIRE_TURN_MAX_TICKS: u64 = 7 * TICK_RATE as u64;

/// Vampire animation clock increment per tick.
pub const VAMPIRE_ANIM_RATE: f64 = 0.05;

// --- Money cats ---

/// Cats present at game start.
pub const INITIAL_CAT_COUNT: u32 = 8;

/// Cat move speed range (units per tick).
pub const CAT_SPEED_MIN: f64 = 0.03;
pub const CAT_SPEED_MAX: f64 = 0.05;

/// Roaming drift runs at this fraction of the cat's move speed.
pub const CAT_ROAM_SPEED_FACTOR: f64 = 0.5;

/// Per-tick probability of a roaming cat picking a new heading.
pub const CAT_ROAM_TURN_PROBABILITY: f64 = 0.02;

/// Flee-trigger distance range, randomized per cat at creation.
pub const CAT_SCARED_DISTANCE_MIN: f64 = 5.0;
pub const CAT_SCARED_DISTANCE_MAX: f64 = 8.0;

/// Cat speed while answering a call (units per tick).
pub const CAT_CALL_SPEED: f64 = 0.1;

/// Money value range per cat (inclusive).
pub const CAT_VALUE_MIN: u32 = 5;
pub const CAT_VALUE_MAX: u32 = 10;

/// Rescue distance (player–cat).
pub const CAT_RESCUE_RANGE: f64 = 1.0;

/// Saved-cat timeline: float upward for 3 s, fade until 5 s, then remove.
pub const CAT_FLOAT_TICKS: u64 = 3 * TICK_RATE as u64;
pub const CAT_REMOVE_TICKS: u64 = 5 * TICK_RATE as u64;

/// Height gained over the float phase.
pub const CAT_FLOAT_HEIGHT: f64 = 5.0;

/// Resting body height of a cat.
pub const CAT_BASE_Y: f64 = 0.3;

/// How long the cat-call busy flag stays set (5 seconds).
pub const CAT_CALL_DURATION_TICKS: u64 = 5 * TICK_RATE as u64;

// --- Dog ---

/// Follow point trails this far behind the player.
pub const DOG_FOLLOW_DISTANCE: f64 = 2.0;

/// Dog base speed (units per tick).
pub const DOG_FOLLOW_SPEED: f64 = 0.08;

/// The dog hunts the nearest vampire within this range while the player attacks.
pub const DOG_HUNT_RANGE: f64 = 20.0;

/// Speed multiplier while hunting.
pub const DOG_HUNT_SPEED_FACTOR: f64 = 2.5;

/// Bite range — triggers the standard vampire explosion.
pub const DOG_BITE_RANGE: f64 = 1.5;

/// Orbit radius around the player when no vampire is in hunt range.
pub const DOG_CIRCLE_RADIUS: f64 = 3.0;

/// Orbit angular rate (radians of orbit phase per animation unit).
pub const DOG_CIRCLE_RATE: f64 = 0.1;

/// Speed multiplier while circling.
pub const DOG_CIRCLE_SPEED_FACTOR: f64 = 2.0;

/// The dog holds still when within this distance of its target point.
pub const DOG_TARGET_EPSILON: f64 = 0.1;

/// Dog animation clock increment per tick.
pub const DOG_ANIM_RATE: f64 = 0.05;

// --- Combat ---

/// Ticks between collision sweeps (100 ms of simulated time).
pub const COLLISION_INTERVAL_TICKS: u64 = TICK_RATE as u64 / 10;

/// Player–vampire collision distance.
pub const VAMPIRE_HIT_RANGE: f64 = 1.5;

/// Money awarded per vampire kill.
pub const KILL_REWARD: u32 = 20;

/// Money lost when a vampire touches a non-attacking player.
pub const VAMPIRE_PENALTY: u32 = 10;

// --- Lasers ---

/// Source flash and beam nominal lifetime (1 second).
pub const LASER_DURATION_TICKS: u64 = TICK_RATE as u64;

/// Beam travel progress per tick (0..1 range, arrives in 20 ticks).
pub const LASER_TRAVEL_STEP: f64 = 0.05;

/// Impact flash lifetime (0.5 seconds).
pub const LASER_IMPACT_TICKS: u64 = TICK_RATE as u64 / 2;

/// Beam linger after arrival before removal (200 ms).
pub const LASER_LINGER_TICKS: u64 = TICK_RATE as u64 / 5;

/// Beams and flashes sit at chest height.
pub const LASER_BEAM_HEIGHT: f64 = 1.5;

// --- Particles ---

/// Debris particles per vampire explosion.
pub const EXPLOSION_PARTICLE_COUNT: u32 = 30;

/// Downward acceleration applied to debris each tick.
pub const EXPLOSION_GRAVITY: f64 = 0.01;

/// Debris is removed once it falls below this height.
pub const PARTICLE_GROUND_Y: f64 = -1.0;

/// Sparkle particles per cat rescue.
pub const RESCUE_SPARKLE_COUNT: u32 = 20;

/// Upward acceleration applied to rescue sparkles each tick.
pub const SPARKLE_LIFT: f64 = 0.01;

// --- Call pulse rings ---

/// Expanding ground ring lifetime (2 seconds).
pub const CALL_PULSE_DURATION_TICKS: u64 = 2 * TICK_RATE as u64;

/// Rings spawned per call.
pub const CALL_PULSE_COUNT: u32 = 3;

/// Tick offset between successive rings (0.5 seconds).
pub const CALL_PULSE_STAGGER_TICKS: u64 = TICK_RATE as u64 / 2;
