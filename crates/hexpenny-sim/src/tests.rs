//! Tests for the game engine: determinism, combat, rescues, lasers,
//! the dog, spawning, and entity lifecycle.

use hexpenny_core::commands::{InputState, PlayerCommand};
use hexpenny_core::components::{CatState, MoneyCat, Particle, Vampire};
use hexpenny_core::config::GameConfig;
use hexpenny_core::constants::*;
use hexpenny_core::enums::*;
use hexpenny_core::events::GameEvent;
use hexpenny_core::state::GameStateSnapshot;
use hexpenny_core::types::Position;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::engine::GameEngine;
use crate::world_setup;

/// Engine with a started game (one tick consumed by StartGame).
fn started_engine(seed: u64) -> GameEngine {
    let mut engine = GameEngine::new(GameConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    engine
}

fn hold(input: InputState) -> PlayerCommand {
    PlayerCommand::SetInput { input }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started_engine(12345);
    let mut engine_b = started_engine(12345);

    let input = InputState {
        forward: true,
        melee: true,
        ..Default::default()
    };
    engine_a.queue_command(hold(input));
    engine_b.queue_command(hold(input));

    for _ in 0..300 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = started_engine(111);
    let mut engine_b = started_engine(222);

    // Initial placement is already seed-dependent.
    let snap_a = engine_a.tick();
    let snap_b = engine_b.tick();
    let json_a = serde_json::to_string(&snap_a).unwrap();
    let json_b = serde_json::to_string(&snap_b).unwrap();
    assert_ne!(json_a, json_b, "Different seeds should diverge");
}

// ---- Phase and time ----

#[test]
fn test_starts_in_main_menu() {
    let mut engine = GameEngine::new(GameConfig::default());
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::MainMenu);
    assert_eq!(snap.time.tick, 0, "time does not advance in the menu");
    assert!(snap.vampires.is_empty());
}

#[test]
fn test_start_game_populates_world() {
    let mut engine = started_engine(42);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.vampires.len(), INITIAL_VAMPIRE_COUNT as usize);
    assert_eq!(snap.cats.len(), INITIAL_CAT_COUNT as usize);
    assert_eq!(snap.hud.money_points, STARTING_MONEY);
    assert_eq!(snap.hud.active_vampire_count, INITIAL_VAMPIRE_COUNT);
    assert_eq!(snap.hud.saved_cat_count, 0);
}

#[test]
fn test_pause_freezes_time() {
    let mut engine = started_engine(42);
    for _ in 0..10 {
        engine.tick();
    }
    let before = engine.time().tick;

    engine.queue_command(PlayerCommand::Pause);
    for _ in 0..20 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
    }
    assert_eq!(engine.time().tick, before, "no ticks while paused");

    engine.queue_command(PlayerCommand::Resume);
    engine.tick();
    assert_eq!(engine.time().tick, before + 1);
}

#[test]
fn test_tick_timing() {
    let mut engine = started_engine(42);
    for _ in 0..119 {
        engine.tick();
    }
    let snap = engine.tick();
    // StartGame tick plus 120 more
    assert_eq!(snap.time.tick, 121);
    assert!((snap.time.elapsed_secs - 121.0 / TICK_RATE as f64).abs() < 1e-9);
}

// ---- Arena containment ----

#[test]
fn test_everything_stays_in_arena() {
    let mut engine = started_engine(7);
    engine.queue_command(hold(InputState {
        forward: true,
        ..Default::default()
    }));

    let mut last = GameStateSnapshot::default();
    for _ in 0..900 {
        last = engine.tick();
    }

    let contained = |pos: &Position| {
        pos.x >= -ARENA_HALF_EXTENT
            && pos.x <= ARENA_HALF_EXTENT
            && pos.z >= -ARENA_HALF_EXTENT
            && pos.z <= ARENA_HALF_EXTENT
    };
    assert!(contained(&last.player.position), "player in arena");
    assert!(contained(&last.dog.position), "dog in arena");
    for vampire in &last.vampires {
        assert!(contained(&vampire.position), "vampire in arena");
    }
    for cat in &last.cats {
        assert!(contained(&cat.position), "cat in arena");
    }
}

#[test]
fn test_dog_stays_in_arena_while_circling_at_edge() {
    // No vampires at all, so a held melee keeps the dog circling; the
    // orbit around an edge-pinned player must not leave the arena.
    let mut engine = GameEngine::new(GameConfig {
        seed: 42,
        initial_vampire_count: 0,
        vampire_cap: 0,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    engine.queue_command(hold(InputState {
        forward: true,
        melee: true,
        ..Default::default()
    }));

    for _ in 0..2000 {
        let snap = engine.tick();
        let pos = &snap.dog.position;
        assert!(
            pos.x.abs() <= ARENA_HALF_EXTENT && pos.z.abs() <= ARENA_HALF_EXTENT,
            "dog left the arena at ({:.2}, {:.2})",
            pos.x,
            pos.z
        );
    }
}

// ---- Combat ----

#[test]
fn test_melee_kill_awards_money_and_debris() {
    let mut engine = started_engine(42);
    engine.spawn_vampire_at(1.0, 0.0);
    engine.queue_command(hold(InputState {
        melee: true,
        ..Default::default()
    }));

    let mut exploded_events = 0;
    for _ in 0..12 {
        let snap = engine.tick();
        exploded_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::VampireExploded { .. }))
            .count();
    }

    assert_eq!(exploded_events, 1, "exactly one explosion");
    assert_eq!(engine.score(), STARTING_MONEY + KILL_REWARD);

    let debris = engine
        .world()
        .query::<&Particle>()
        .iter()
        .filter(|(_, p)| p.kind == ParticleKind::Debris)
        .count();
    assert_eq!(debris, EXPLOSION_PARTICLE_COUNT as usize);
}

#[test]
fn test_vampire_touch_costs_money() {
    let mut engine = started_engine(42);
    engine.spawn_vampire_at(1.0, 0.0);

    // One collision sweep happens within the first interval
    let mut money_lost = false;
    for _ in 0..COLLISION_INTERVAL_TICKS + 1 {
        let snap = engine.tick();
        if snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::MoneyLost { .. }))
        {
            money_lost = true;
        }
    }
    assert!(money_lost);
    assert_eq!(engine.score(), STARTING_MONEY - VAMPIRE_PENALTY);
}

#[test]
fn test_money_clamps_at_zero() {
    let mut engine = GameEngine::new(GameConfig {
        seed: 42,
        starting_money: 5,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    engine.spawn_vampire_at(0.5, 0.5);

    for _ in 0..60 {
        engine.tick();
    }
    assert_eq!(engine.score(), 0, "money never goes negative");
}

#[test]
fn test_exploded_vampire_is_terminal() {
    let mut engine = started_engine(42);
    let entity = engine.spawn_vampire_at(1.0, 0.0);
    engine.queue_command(hold(InputState {
        melee: true,
        ..Default::default()
    }));
    for _ in 0..12 {
        engine.tick();
    }

    // Dead record may linger briefly, but it never rejoins the simulation
    engine.queue_command(hold(InputState::default()));
    for _ in 0..30 {
        let snap = engine.tick();
        if let Some(view) = snap.vampires.iter().find(|v| v.id == entity.id()) {
            assert_eq!(view.phase, VampirePhase::Exploded);
        }
    }
    assert!(!engine.world().contains(entity), "dead record cleaned up");
    assert_eq!(
        engine.score(),
        STARTING_MONEY + KILL_REWARD,
        "no penalties from a dead vampire"
    );
}

// ---- Cats ----

#[test]
fn test_walking_into_roaming_cat_rescues_it() {
    let mut engine = started_engine(42);
    let entity = engine.spawn_cat_at(0.0, 3.0, 7);
    // Initial camera looks down +z, so forward walks the player at the cat
    engine.queue_command(hold(InputState {
        forward: true,
        ..Default::default()
    }));

    let mut saved_value = None;
    for _ in 0..30 {
        let snap = engine.tick();
        for event in &snap.events {
            if let GameEvent::CatSaved { money_value } = event {
                saved_value = Some(*money_value);
            }
        }
    }

    assert_eq!(saved_value, Some(7));
    assert_eq!(engine.score(), STARTING_MONEY + 7);
    let state = engine.world().get::<&CatState>(entity).unwrap();
    assert_eq!(state.phase, CatPhase::Saved);
}

#[test]
fn test_cat_call_flags_all_cats() {
    let mut engine = started_engine(42);
    engine.queue_command(hold(InputState {
        call: true,
        ..Default::default()
    }));
    let snap = engine.tick();

    assert!(snap.player.is_calling_cats);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::CatCall { cats_called } if *cats_called == INITIAL_CAT_COUNT)));
    assert!(!snap.call_pulses.is_empty());
    for cat in &snap.cats {
        assert_eq!(cat.phase, CatPhase::Called);
    }
}

#[test]
fn test_cat_call_flag_clears_after_duration() {
    let mut engine = started_engine(42);
    engine.queue_command(hold(InputState {
        call: true,
        ..Default::default()
    }));
    engine.tick();
    engine.queue_command(hold(InputState::default()));

    let mut last = GameStateSnapshot::default();
    for _ in 0..CAT_CALL_DURATION_TICKS + 2 {
        last = engine.tick();
    }

    assert!(!last.player.is_calling_cats, "busy flag clears on schedule");
    // Called cats keep homing until rescued; none reverts to roaming
    for cat in &last.cats {
        assert!(matches!(cat.phase, CatPhase::Called | CatPhase::Saved));
    }
}

#[test]
fn test_saved_cat_floats_fades_and_despawns() {
    let mut engine = started_engine(42);
    let entity = engine.spawn_cat_at(0.0, 0.5, 5);

    // Rescue happens on the first sweep
    for _ in 0..COLLISION_INTERVAL_TICKS + 1 {
        engine.tick();
    }

    // Mid-float: rising, fully opaque
    for _ in 0..CAT_FLOAT_TICKS / 2 {
        engine.tick();
    }
    let snap = engine.tick();
    let view = snap.cats.iter().find(|c| c.id == entity.id()).unwrap();
    assert!(view.float_height > 0.0);
    assert!((view.opacity - 1.0).abs() < 1e-9);

    // Mid-fade: fully risen, translucent
    for _ in 0..CAT_FLOAT_TICKS {
        engine.tick();
    }
    let snap = engine.tick();
    let view = snap.cats.iter().find(|c| c.id == entity.id()).unwrap();
    assert!((view.float_height - CAT_FLOAT_HEIGHT).abs() < 0.2);
    assert!(view.opacity < 1.0);

    // Past removal
    for _ in 0..CAT_REMOVE_TICKS {
        engine.tick();
    }
    assert!(!engine.world().contains(entity), "saved cat removed");
}

// ---- Lasers ----

#[test]
fn test_laser_attack_kills_every_vampire() {
    let mut engine = started_engine(42);
    engine.queue_command(hold(InputState {
        laser: true,
        ..Default::default()
    }));
    let snap = engine.tick();

    assert!(snap.player.is_laser_attacking);
    assert_eq!(snap.laser_beams.len(), INITIAL_VAMPIRE_COUNT as usize);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::LaserAttack { beam_count } if *beam_count == INITIAL_VAMPIRE_COUNT)));

    // Beams arrive within 1/LASER_TRAVEL_STEP ticks
    let mut last = GameStateSnapshot::default();
    for _ in 0..25 {
        last = engine.tick();
    }
    assert_eq!(last.hud.active_vampire_count, 0);
    assert_eq!(
        engine.score(),
        STARTING_MONEY + INITIAL_VAMPIRE_COUNT * KILL_REWARD
    );
}

#[test]
fn test_laser_flag_clears_when_effects_finish() {
    let mut engine = started_engine(42);
    engine.queue_command(hold(InputState {
        laser: true,
        ..Default::default()
    }));
    engine.tick();
    engine.queue_command(hold(InputState::default()));

    // Source flashes run the longest (a full second)
    let mut last = GameStateSnapshot::default();
    for _ in 0..LASER_DURATION_TICKS + 30 {
        last = engine.tick();
    }
    assert!(engine.lasers().is_empty());
    assert!(!last.player.is_laser_attacking);
}

#[test]
fn test_laser_target_already_dead_is_no_op() {
    let mut engine = started_engine(42);
    let entity = engine.spawn_vampire_at(1.0, 0.0);

    // Fire the laser, then melee the nearby vampire before the beam lands
    engine.queue_command(hold(InputState {
        laser: true,
        melee: true,
        ..Default::default()
    }));

    let mut exploded_events = 0;
    for _ in 0..40 {
        let snap = engine.tick();
        exploded_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::VampireExploded { .. }))
            .count();
    }

    // 10 seeded vampires + 1 test vampire, each exploding exactly once
    assert_eq!(exploded_events, INITIAL_VAMPIRE_COUNT as usize + 1);
    assert_eq!(
        engine.score(),
        STARTING_MONEY + (INITIAL_VAMPIRE_COUNT + 1) * KILL_REWARD
    );
    assert!(!engine.world().contains(entity));
}

// ---- Dog ----

#[test]
fn test_dog_follows_when_calm() {
    let mut engine = started_engine(42);
    let snap = engine.tick();
    assert_eq!(snap.dog.mode, DogMode::Follow);
}

#[test]
fn test_dog_hunts_and_bites_while_player_attacks() {
    let mut engine = started_engine(42);
    // Park a vampire near the dog but outside the player's melee range
    engine.spawn_vampire_at(0.0, -4.0);
    engine.queue_command(hold(InputState {
        melee: true,
        ..Default::default()
    }));

    let mut hunted = false;
    let mut exploded = false;
    for _ in 0..60 {
        let snap = engine.tick();
        if snap.dog.mode == DogMode::Hunt {
            hunted = true;
        }
        if snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::VampireExploded { .. }))
        {
            exploded = true;
            break;
        }
    }
    assert!(hunted, "dog switched to hunting");
    assert!(exploded, "dog bite exploded the vampire");
    assert_eq!(engine.score(), STARTING_MONEY + KILL_REWARD);
}

// ---- Spawner ----

#[test]
fn test_spawner_respects_cap() {
    let mut engine = started_engine(42);
    for _ in 0..VAMPIRE_SPAWN_INTERVAL_TICKS + 60 {
        engine.tick();
    }
    let snap = engine.tick();
    // Population already at the cap, so the interval elapsing spawns nothing
    assert_eq!(snap.hud.active_vampire_count, VAMPIRE_CAP);
}

#[test]
fn test_spawner_refills_after_kills() {
    let mut engine = started_engine(42);
    engine.queue_command(hold(InputState {
        laser: true,
        ..Default::default()
    }));
    for _ in 0..30 {
        engine.tick();
    }
    engine.queue_command(hold(InputState::default()));
    assert_eq!(engine.tick().hud.active_vampire_count, 0);

    let mut spawned = false;
    let mut last = GameStateSnapshot::default();
    for _ in 0..VAMPIRE_SPAWN_INTERVAL_TICKS + 10 {
        last = engine.tick();
        if last
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::VampireSpawned { .. }))
        {
            spawned = true;
        }
    }
    assert!(spawned, "spawner restarted after the population dropped");
    assert_eq!(last.hud.active_vampire_count, 1, "one per interval");
}

// ---- Spawn placement ----

#[test]
fn test_random_spawn_positions_respect_distance() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let config = GameConfig::default();
    let player = Position::new(0.0, 0.0, 0.0);

    for _ in 0..200 {
        let pos = world_setup::random_spawn_position(&mut rng, &config, &player);
        assert!(pos.x.abs() <= config.spawn_half_extent);
        assert!(pos.z.abs() <= config.spawn_half_extent);
        assert!(
            player.ground_distance_to(&pos) >= config.spawn_min_player_distance,
            "spawned too close to the player"
        );
    }
}

#[test]
fn test_cats_spawn_at_resting_height() {
    let mut engine = started_engine(42);
    let snap = engine.tick();
    assert!(!snap.cats.is_empty());
    for cat in &snap.cats {
        // Resting height from the start, so the rescue float begins smoothly
        assert!((cat.position.y - CAT_BASE_Y).abs() < 1e-12);
        assert_eq!(cat.float_height, 0.0);
    }
}

#[test]
fn test_initial_population_counts() {
    let mut engine = started_engine(9);
    engine.tick();
    let vampires = engine.world().query::<&Vampire>().iter().count();
    let cats = engine.world().query::<&MoneyCat>().iter().count();
    assert_eq!(vampires, INITIAL_VAMPIRE_COUNT as usize);
    assert_eq!(cats, INITIAL_CAT_COUNT as usize);
}

// ---- Commands ----

#[test]
fn test_time_scale_clamped() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::SetTimeScale { scale: 99.0 });
    engine.tick();
    assert_eq!(engine.time_scale(), 4.0);

    engine.queue_command(PlayerCommand::SetTimeScale { scale: -1.0 });
    engine.tick();
    assert_eq!(engine.time_scale(), 0.0);
}

#[test]
fn test_free_camera_mode() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::SetCameraMode {
        mode: CameraMode::Free,
    });
    engine.queue_command(PlayerCommand::SetFreeCamera {
        x: 5.0,
        y: 20.0,
        z: 5.0,
        look_x: 0.0,
        look_y: 0.0,
        look_z: 0.0,
    });
    let snap = engine.tick();
    assert_eq!(snap.camera.mode, CameraMode::Free);
    assert_eq!(snap.camera.position.y, 20.0);
}

#[test]
fn test_move_speed_clamped() {
    let mut engine = started_engine(42);
    engine.queue_command(PlayerCommand::SetMoveSpeed { speed: 10.0 });
    engine.queue_command(hold(InputState {
        forward: true,
        ..Default::default()
    }));
    let before = engine.tick().player.position;
    let after = engine.tick().player.position;
    let step = before.ground_distance_to(&after);
    assert!(step <= 0.5 + 1e-9, "speed clamped to the tunable range");
}
