//! Laser effect system: advances beam travel, detonates targets on
//! arrival, and retires finished records.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use hexpenny_core::components::{Player, PlayerState};
use hexpenny_core::config::GameConfig;
use hexpenny_core::constants::*;
use hexpenny_core::events::GameEvent;

use crate::effects::LaserEffect;

use super::combat;

/// Run one tick of laser bookkeeping.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    lasers: &mut Vec<LaserEffect>,
    config: &GameConfig,
    tick: u64,
) {
    let mut spawned: Vec<LaserEffect> = Vec::new();

    let mut i = 0;
    while i < lasers.len() {
        let remove = match &mut lasers[i] {
            LaserEffect::Source { started_at, .. } => tick >= *started_at + LASER_DURATION_TICKS,
            LaserEffect::Impact { started_at, .. } => tick >= *started_at + LASER_IMPACT_TICKS,
            LaserEffect::Beam {
                target,
                end,
                progress,
                arrived_at,
                ..
            } => {
                if *arrived_at == 0 {
                    *progress += LASER_TRAVEL_STEP;
                    if *progress >= 1.0 {
                        // Arrival: flash at the frozen endpoint and detonate
                        // the target. A target already killed by melee or
                        // the dog makes this a no-op.
                        *progress = 1.0;
                        *arrived_at = tick;
                        spawned.push(LaserEffect::Impact {
                            position: *end,
                            started_at: tick,
                        });
                        combat::explode_vampire(world, rng, score, events, config, *target);
                    }
                    false
                } else {
                    tick >= *arrived_at + LASER_LINGER_TICKS
                }
            }
        };

        if remove {
            lasers.swap_remove(i);
        } else {
            i += 1;
        }
    }

    lasers.extend(spawned);

    // The laser busy flag holds until every record from the attack is gone
    if lasers.is_empty() {
        for (_, (_, state)) in world.query_mut::<(&Player, &mut PlayerState)>() {
            state.is_laser_attacking = false;
        }
    }
}
