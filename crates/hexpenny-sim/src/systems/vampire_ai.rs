//! Vampire AI system: advances every live vampire's wander behavior.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use hexpenny_core::components::*;
use hexpenny_core::constants::VAMPIRE_ANIM_RATE;
use hexpenny_core::enums::VampirePhase;
use hexpenny_core::types::{Arena, Position};

use hexpenny_actor_ai::vampire::{self, VampireContext};

/// Run one tick of wandering for all vampires.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, arena: &Arena, tick: u64) {
    for (_, (_, pos, heading, state)) in
        world.query_mut::<(&Vampire, &mut Position, &mut Heading, &mut VampireState)>()
    {
        if state.phase == VampirePhase::Exploded {
            continue;
        }

        state.anim_time += VAMPIRE_ANIM_RATE;

        let ctx = VampireContext {
            phase: state.phase,
            position: *pos,
            direction: state.direction,
            speed: state.speed,
            next_turn_tick: state.next_turn_tick,
            tick,
            arena: *arena,
        };
        let update = vampire::evaluate(&ctx, rng);

        pos.x = update.x;
        pos.z = update.z;
        heading.yaw = update.yaw;
        state.direction = update.direction;
        state.speed = update.speed;
        state.next_turn_tick = update.next_turn_tick;
    }
}
