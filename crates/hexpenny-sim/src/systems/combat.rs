//! Combat resolver: throttled proximity sweeps between the player and
//! everything touchable, plus the shared kill/rescue entry points.
//!
//! `explode_vampire` and `save_cat` are the single mutation paths into the
//! terminal states. Melee, lasers, the dog, and walk-up rescues all route
//! through them, and both are no-ops on already-terminal entities.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hexpenny_core::components::*;
use hexpenny_core::config::GameConfig;
use hexpenny_core::constants::*;
use hexpenny_core::enums::{CatPhase, ParticleKind, VampirePhase};
use hexpenny_core::events::GameEvent;
use hexpenny_core::types::{Position, Velocity};

/// Run one collision sweep if the throttle interval has elapsed.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
    tick: u64,
    last_sweep_tick: &mut u64,
) {
    if tick < *last_sweep_tick + COLLISION_INTERVAL_TICKS {
        return;
    }
    *last_sweep_tick = tick;

    let Some((player_pos, attacking)) = player_combat_state(world) else {
        return;
    };

    // Collect first: explode/save spawn particle entities, which cannot
    // happen while a query borrow is live.
    let mut hits: Vec<Entity> = Vec::new();
    let mut penalties = 0u32;
    for (entity, (_, pos, state)) in world.query::<(&Vampire, &Position, &VampireState)>().iter() {
        if state.phase == VampirePhase::Exploded {
            continue;
        }
        if player_pos.ground_distance_to(pos) < VAMPIRE_HIT_RANGE {
            if attacking {
                hits.push(entity);
            } else {
                penalties += 1;
            }
        }
    }

    let mut rescues: Vec<Entity> = Vec::new();
    for (entity, (_, pos, state)) in world.query::<(&MoneyCat, &Position, &CatState)>().iter() {
        if state.phase == CatPhase::Saved {
            continue;
        }
        if player_pos.ground_distance_to(pos) < CAT_RESCUE_RANGE {
            rescues.push(entity);
        }
    }

    for entity in hits {
        explode_vampire(world, rng, score, events, config, entity);
    }
    for _ in 0..penalties {
        *score = score.saturating_sub(config.vampire_penalty);
        events.push(GameEvent::MoneyLost {
            amount: config.vampire_penalty,
        });
        log::debug!("vampire touch, money now {score}");
    }
    for entity in rescues {
        save_cat(world, rng, score, events, tick, entity);
    }
}

/// Explode a vampire: flag it terminal, burst debris, and award the kill.
/// Returns false (and does nothing) if the vampire is already exploded
/// or the entity is gone.
pub fn explode_vampire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
    entity: Entity,
) -> bool {
    let position = {
        let Ok(mut query) = world.query_one::<(&Position, &mut VampireState)>(entity) else {
            return false;
        };
        let Some((pos, state)) = query.get() else {
            return false;
        };
        if state.phase == VampirePhase::Exploded {
            return false;
        }
        state.phase = VampirePhase::Exploded;
        *pos
    };

    for _ in 0..EXPLOSION_PARTICLE_COUNT {
        let velocity = Velocity::new(
            (rng.gen::<f64>() - 0.5) * 0.2,
            rng.gen::<f64>() * 0.2,
            (rng.gen::<f64>() - 0.5) * 0.2,
        );
        world.spawn((
            position,
            Particle {
                kind: ParticleKind::Debris,
                velocity,
                gravity: EXPLOSION_GRAVITY,
                expires_at_tick: None,
            },
        ));
    }

    *score += config.kill_reward;
    events.push(GameEvent::VampireExploded { position });
    log::debug!("vampire exploded at ({:.1}, {:.1})", position.x, position.z);
    true
}

/// Rescue a cat: flag it saved, award its value, and burst sparkles.
/// No-op on already-saved cats.
pub fn save_cat(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    tick: u64,
    entity: Entity,
) -> bool {
    let (position, value) = {
        let Ok(mut query) = world.query_one::<(&Position, &mut CatState)>(entity) else {
            return false;
        };
        let Some((pos, state)) = query.get() else {
            return false;
        };
        if state.phase == CatPhase::Saved {
            return false;
        }
        state.phase = CatPhase::Saved;
        state.saved_at_tick = tick;
        (*pos, state.money_value)
    };

    for _ in 0..RESCUE_SPARKLE_COUNT {
        let velocity = Velocity::new(
            (rng.gen::<f64>() - 0.5) * 0.1,
            rng.gen::<f64>() * 0.1,
            (rng.gen::<f64>() - 0.5) * 0.1,
        );
        world.spawn((
            Position::new(position.x, position.y + 0.5, position.z),
            Particle {
                kind: ParticleKind::Sparkle,
                velocity,
                // Sparkles accelerate upward while the cat floats
                gravity: -SPARKLE_LIFT,
                expires_at_tick: Some(tick + CAT_REMOVE_TICKS),
            },
        ));
    }

    *score += value;
    events.push(GameEvent::CatSaved { money_value: value });
    log::debug!("cat saved, +{value} money");
    true
}

/// Player position and melee flag, or None before the world is set up.
pub fn player_combat_state(world: &World) -> Option<(Position, bool)> {
    world
        .query::<(&Player, &Position, &PlayerState)>()
        .iter()
        .next()
        .map(|(_, (_, pos, state))| (*pos, state.is_attacking))
}
