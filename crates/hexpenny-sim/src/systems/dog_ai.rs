//! Dog AI system: follow/hunt/circle movement and bite resolution.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use hexpenny_core::components::*;
use hexpenny_core::config::GameConfig;
use hexpenny_core::constants::DOG_ANIM_RATE;
use hexpenny_core::enums::VampirePhase;
use hexpenny_core::events::GameEvent;
use hexpenny_core::types::Position;

use hexpenny_actor_ai::dog::{self, DogContext};

use super::combat;

/// Run one tick of dog behavior.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
) {
    let Some((player_pos, player_yaw, attacking)) = player_pose(world) else {
        return;
    };

    // Follow point trails directly behind the player's facing
    let target = Position::new(
        player_pos.x - player_yaw.sin() * config.dog_follow_distance,
        0.0,
        player_pos.z - player_yaw.cos() * config.dog_follow_distance,
    );

    let nearest = nearest_live_vampire(world, &dog_position(world).unwrap_or(player_pos));

    let mut bite_target: Option<Entity> = None;

    for (_, (_, pos, heading, state)) in
        world.query_mut::<(&Dog, &mut Position, &mut Heading, &mut DogState)>()
    {
        state.anim_time += DOG_ANIM_RATE;
        state.target_x = target.x;
        state.target_z = target.z;

        let ctx = DogContext {
            position: *pos,
            yaw: heading.yaw,
            anim_time: state.anim_time,
            player_position: player_pos,
            target,
            player_is_attacking: attacking,
            nearest_vampire: nearest.map(|(_, p)| p),
            follow_speed: config.dog_follow_speed,
            arena: config.arena,
        };
        let update = dog::evaluate(&ctx);

        pos.x = update.x;
        pos.z = update.z;
        heading.yaw = update.yaw;
        state.mode = update.mode;
        if update.bite {
            bite_target = nearest.map(|(entity, _)| entity);
        }
    }

    if let Some(entity) = bite_target {
        combat::explode_vampire(world, rng, score, events, config, entity);
    }
}

fn player_pose(world: &World) -> Option<(Position, f64, bool)> {
    world
        .query::<(&Player, &Position, &Heading, &PlayerState)>()
        .iter()
        .next()
        .map(|(_, (_, pos, heading, state))| (*pos, heading.yaw, state.is_attacking))
}

fn dog_position(world: &World) -> Option<Position> {
    world
        .query::<(&Dog, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

/// Nearest non-exploded vampire to the given point.
fn nearest_live_vampire(world: &World, from: &Position) -> Option<(Entity, Position)> {
    let mut nearest: Option<(Entity, Position)> = None;
    let mut nearest_distance = f64::INFINITY;
    for (entity, (_, pos, state)) in world.query::<(&Vampire, &Position, &VampireState)>().iter() {
        if state.phase == VampirePhase::Exploded {
            continue;
        }
        let distance = from.ground_distance_to(pos);
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest = Some((entity, *pos));
        }
    }
    nearest
}
