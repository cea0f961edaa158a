//! Entity spawn factories for setting up the game world.
//!
//! Creates the player, the dog, and the initial vampire and cat
//! populations with appropriate component bundles.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hexpenny_core::components::*;
use hexpenny_core::config::GameConfig;
use hexpenny_core::constants::*;
use hexpenny_core::types::Position;

/// Set up a fresh game world: player at the origin, dog at heel, and the
/// starting vampire and cat populations.
pub fn setup_game(world: &mut World, rng: &mut ChaCha8Rng, config: &GameConfig) {
    let player_pos = Position::new(0.0, 0.0, 0.0);
    spawn_player(world, player_pos);
    spawn_dog(world, player_pos);

    for _ in 0..config.initial_vampire_count {
        spawn_vampire(world, rng, config, &player_pos);
    }
    for _ in 0..config.initial_cat_count {
        spawn_cat(world, rng, config, &player_pos);
    }
}

/// Spawn the player entity.
pub fn spawn_player(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((Player, position, Heading::default(), PlayerState::default()))
}

/// Spawn the dog companion at its follow point behind the player.
pub fn spawn_dog(world: &mut World, player_pos: Position) -> hecs::Entity {
    let position = Position::new(
        player_pos.x,
        0.0,
        player_pos.z - DOG_FOLLOW_DISTANCE,
    );
    let state = DogState {
        target_x: position.x,
        target_z: position.z,
        ..Default::default()
    };
    world.spawn((Dog, position, Heading::default(), state))
}

/// Spawn a single vampire at a random position away from the player.
/// Its first wander heading is drawn on its first AI tick.
pub fn spawn_vampire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    player_pos: &Position,
) -> hecs::Entity {
    let position = random_spawn_position(rng, config, player_pos);
    let state = VampireState {
        phase: Default::default(),
        direction: DVec2::new(0.0, 1.0),
        speed: VAMPIRE_SPEED_MIN,
        next_turn_tick: 0,
        anim_time: 0.0,
    };
    world.spawn((Vampire, position, Heading::default(), state))
}

/// Spawn a single money cat with randomized speed, nerve, and value.
pub fn spawn_cat(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    player_pos: &Position,
) -> hecs::Entity {
    let ground = random_spawn_position(rng, config, player_pos);
    let position = Position::new(ground.x, CAT_BASE_Y, ground.z);
    let state = CatState {
        phase: Default::default(),
        saved_at_tick: 0,
        move_speed: rng.gen_range(CAT_SPEED_MIN..CAT_SPEED_MAX),
        scared_distance: rng.gen_range(CAT_SCARED_DISTANCE_MIN..CAT_SCARED_DISTANCE_MAX),
        money_value: rng.gen_range(CAT_VALUE_MIN..=CAT_VALUE_MAX),
    };
    let yaw = rng.gen_range(0.0..std::f64::consts::TAU);
    world.spawn((MoneyCat, position, Heading { yaw }, state))
}

/// Pick a random ground position inside the spawn region, at least the
/// configured distance from the player. Resampling is capped; if every
/// attempt lands too close, fall back to a point pushed straight out
/// from the player and clamped to the spawn region.
pub fn random_spawn_position(
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    player_pos: &Position,
) -> Position {
    let half = config.spawn_half_extent;
    for _ in 0..SPAWN_MAX_ATTEMPTS {
        let x = rng.gen_range(-half..half);
        let z = rng.gen_range(-half..half);
        let dx = x - player_pos.x;
        let dz = z - player_pos.z;
        if (dx * dx + dz * dz).sqrt() >= config.spawn_min_player_distance {
            return Position::new(x, 0.0, z);
        }
    }
    let x = (player_pos.x + config.spawn_min_player_distance).clamp(-half, half);
    let z = player_pos.z.clamp(-half, half);
    Position::new(x, 0.0, z)
}
