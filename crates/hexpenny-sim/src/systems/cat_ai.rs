//! Cat AI system: roam/flee/called movement, the called-cat rescue check,
//! and the saved-cat float timeline.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use hexpenny_core::components::*;
use hexpenny_core::constants::*;
use hexpenny_core::enums::CatPhase;
use hexpenny_core::events::GameEvent;
use hexpenny_core::types::{Arena, Position};

use hexpenny_actor_ai::cat::{self, CatContext};

use super::combat;

/// Run one tick of behavior for all cats.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    arena: &Arena,
    tick: u64,
) {
    let Some((player_pos, _)) = combat::player_combat_state(world) else {
        return;
    };

    // Rescues spawn sparkle entities, so collect them and apply after the
    // query borrow ends.
    let mut rescues: Vec<Entity> = Vec::new();

    for (entity, (_, pos, heading, state)) in
        world.query_mut::<(&MoneyCat, &mut Position, &mut Heading, &mut CatState)>()
    {
        if state.phase == CatPhase::Saved {
            // Float upward for the first part of the timeline, then hold
            // while fading (the snapshot computes opacity from age).
            let age = tick.saturating_sub(state.saved_at_tick);
            let float = (age as f64 / CAT_FLOAT_TICKS as f64).min(1.0);
            pos.y = CAT_BASE_Y + float * CAT_FLOAT_HEIGHT;
            continue;
        }

        // Called cats keep coming until they reach the player, even after
        // the player's call winds down.
        if state.phase == CatPhase::Called
            && pos.ground_distance_to(&player_pos) < CAT_RESCUE_RANGE
        {
            rescues.push(entity);
            continue;
        }

        let ctx = CatContext {
            phase: state.phase,
            position: *pos,
            yaw: heading.yaw,
            player_position: player_pos,
            move_speed: state.move_speed,
            scared_distance: state.scared_distance,
            arena: *arena,
        };
        let update = cat::evaluate(&ctx, rng);

        pos.x = update.x;
        pos.z = update.z;
        heading.yaw = update.yaw;
        state.phase = update.phase;
    }

    for entity in rescues {
        combat::save_cat(world, rng, score, events, tick, entity);
    }
}
