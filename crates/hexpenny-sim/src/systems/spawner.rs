//! Vampire spawner: tops the population back up on a fixed interval.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use hexpenny_core::components::*;
use hexpenny_core::config::GameConfig;
use hexpenny_core::enums::VampirePhase;
use hexpenny_core::events::GameEvent;
use hexpenny_core::types::Position;

use crate::world_setup;

use super::combat;

/// Spawn one vampire if the interval has elapsed and the live population
/// is under the cap.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
    tick: u64,
    last_spawn_tick: &mut u64,
) {
    if tick < *last_spawn_tick + config.vampire_spawn_interval_ticks {
        return;
    }

    let live = world
        .query::<(&Vampire, &VampireState)>()
        .iter()
        .filter(|(_, (_, state))| state.phase != VampirePhase::Exploded)
        .count() as u32;
    if live >= config.vampire_cap {
        return;
    }

    let player_pos = combat::player_combat_state(world)
        .map(|(pos, _)| pos)
        .unwrap_or_default();
    let entity = world_setup::spawn_vampire(world, rng, config, &player_pos);
    *last_spawn_tick = tick;

    if let Ok(pos) = world.get::<&Position>(entity) {
        events.push(GameEvent::VampireSpawned { position: *pos });
    }
    log::debug!("vampire spawned, {} live", live + 1);
}
