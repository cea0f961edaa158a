//! Money cat behavior.
//!
//! Cats roam slowly, flee when the player gets inside their personal
//! scared distance, and sprint straight to the player when called.
//! Saved cats are terminal — the rescue timeline is driven elsewhere.

use rand::Rng;

use hexpenny_core::constants::*;
use hexpenny_core::enums::CatPhase;
use hexpenny_core::types::{Arena, Position};

/// Input to the cat behavior for a single entity.
pub struct CatContext {
    pub phase: CatPhase,
    pub position: Position,
    pub yaw: f64,
    pub player_position: Position,
    pub move_speed: f64,
    pub scared_distance: f64,
    pub arena: Arena,
}

/// Output from the cat behavior.
pub struct CatUpdate {
    pub phase: CatPhase,
    pub x: f64,
    pub z: f64,
    pub yaw: f64,
}

/// Evaluate one tick of behavior for a cat.
pub fn evaluate(ctx: &CatContext, rng: &mut impl Rng) -> CatUpdate {
    let mut update = CatUpdate {
        phase: ctx.phase,
        x: ctx.position.x,
        z: ctx.position.z,
        yaw: ctx.yaw,
    };

    // Terminal state — the float/fade timeline owns saved cats
    if ctx.phase == CatPhase::Saved {
        return update;
    }

    let distance_to_player = ctx.position.ground_distance_to(&ctx.player_position);

    if ctx.phase == CatPhase::Called {
        // Sprint straight at the player
        let dx = ctx.player_position.x - ctx.position.x;
        let dz = ctx.player_position.z - ctx.position.z;
        let len = (dx * dx + dz * dz).sqrt();
        if len > f64::EPSILON {
            let (x, z) = ctx.arena.clamp(
                ctx.position.x + dx / len * CAT_CALL_SPEED,
                ctx.position.z + dz / len * CAT_CALL_SPEED,
            );
            update.x = x;
            update.z = z;
            update.yaw = dx.atan2(dz);
        }
        return update;
    }

    if distance_to_player < ctx.scared_distance {
        // Flee directly away from the player
        update.phase = CatPhase::Fleeing;
        let dx = ctx.position.x - ctx.player_position.x;
        let dz = ctx.position.z - ctx.player_position.z;
        let len = (dx * dx + dz * dz).sqrt();
        if len > f64::EPSILON {
            let (x, z) = ctx.arena.clamp(
                ctx.position.x + dx / len * ctx.move_speed,
                ctx.position.z + dz / len * ctx.move_speed,
            );
            update.x = x;
            update.z = z;
            update.yaw = dx.atan2(dz);
        }
        return update;
    }

    // Roaming: drift along the current yaw with occasional random turns
    update.phase = CatPhase::Roaming;
    if rng.gen::<f64>() < CAT_ROAM_TURN_PROBABILITY {
        update.yaw = rng.gen_range(0.0..std::f64::consts::TAU);
    }

    let step = ctx.move_speed * CAT_ROAM_SPEED_FACTOR;
    let (x, z) = ctx.arena.clamp(
        ctx.position.x + update.yaw.sin() * step,
        ctx.position.z + update.yaw.cos() * step,
    );
    update.x = x;
    update.z = z;

    // Bounce off the edges by mirroring the heading
    if ctx.arena.on_x_edge(x) {
        update.yaw = std::f64::consts::PI - update.yaw;
    }
    if ctx.arena.on_z_edge(z) {
        update.yaw = -update.yaw;
    }

    update
}
