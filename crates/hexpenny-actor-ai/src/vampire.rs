//! Vampire wander behavior.
//!
//! Vampires random-walk the arena: every few seconds they pick a fresh
//! heading and speed, and they bounce off the arena edges in between.
//! Exploded vampires are terminal and never move again.

use glam::DVec2;
use rand::Rng;

use hexpenny_core::constants::*;
use hexpenny_core::enums::VampirePhase;
use hexpenny_core::types::{Arena, Position};

/// Input to the vampire behavior for a single entity.
pub struct VampireContext {
    pub phase: VampirePhase,
    pub position: Position,
    pub direction: DVec2,
    pub speed: f64,
    pub next_turn_tick: u64,
    pub tick: u64,
    pub arena: Arena,
}

/// Output from the vampire behavior.
pub struct VampireUpdate {
    pub direction: DVec2,
    pub speed: f64,
    pub next_turn_tick: u64,
    /// New clamped ground position.
    pub x: f64,
    pub z: f64,
    /// Facing yaw (movement direction).
    pub yaw: f64,
    pub moved: bool,
}

/// Evaluate one tick of wandering for a vampire.
pub fn evaluate(ctx: &VampireContext, rng: &mut impl Rng) -> VampireUpdate {
    let mut update = VampireUpdate {
        direction: ctx.direction,
        speed: ctx.speed,
        next_turn_tick: ctx.next_turn_tick,
        x: ctx.position.x,
        z: ctx.position.z,
        yaw: ctx.direction.x.atan2(ctx.direction.y),
        moved: false,
    };

    // Terminal state — no movement, no RNG draws
    if ctx.phase == VampirePhase::Exploded {
        return update;
    }

    // Re-heading: pick a fresh direction, speed, and next deadline
    if ctx.tick >= ctx.next_turn_tick {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        update.direction = DVec2::new(angle.sin(), angle.cos());
        update.speed = rng.gen_range(VAMPIRE_SPEED_MIN..VAMPIRE_SPEED_MAX);
        update.next_turn_tick =
            ctx.tick + rng.gen_range(VAMPIRE_TURN_MIN_TICKS..=VAMPIRE_TURN_MAX_TICKS);
    }

    // Step along the current heading, clamped to the arena
    let (x, z) = ctx.arena.clamp(
        ctx.position.x + update.direction.x * update.speed,
        ctx.position.z + update.direction.y * update.speed,
    );
    update.x = x;
    update.z = z;
    update.moved = true;

    // Bounce off the edges by reflecting the offending component
    if ctx.arena.on_x_edge(x) {
        update.direction.x = -update.direction.x;
    }
    if ctx.arena.on_z_edge(z) {
        update.direction.y = -update.direction.y;
    }

    update.yaw = update.direction.x.atan2(update.direction.y);
    update
}
