//! Cleanup system: removes spent particles, removed cats, and exploded
//! vampires no beam still points at.

use hecs::{Entity, World};

use hexpenny_core::components::{CatState, MoneyCat, Particle, Vampire, VampireState};
use hexpenny_core::constants::{CAT_REMOVE_TICKS, PARTICLE_GROUND_Y};
use hexpenny_core::enums::{CatPhase, ParticleKind, VampirePhase};
use hexpenny_core::types::Position;

use crate::effects::LaserEffect;

/// Remove entities whose timelines have run out.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    lasers: &[LaserEffect],
    despawn_buffer: &mut Vec<Entity>,
    tick: u64,
) {
    despawn_buffer.clear();

    // Debris that fell through the floor; sparkles past their expiry.
    for (entity, (pos, particle)) in world.query_mut::<(&Position, &Particle)>() {
        let expired = match particle.kind {
            ParticleKind::Debris => pos.y < PARTICLE_GROUND_Y,
            ParticleKind::Sparkle => particle
                .expires_at_tick
                .is_some_and(|expiry| tick >= expiry),
        };
        if expired {
            despawn_buffer.push(entity);
        }
    }

    // Saved cats at the end of the float/fade timeline.
    for (entity, (_, state)) in world.query_mut::<(&MoneyCat, &CatState)>() {
        if state.phase == CatPhase::Saved && tick >= state.saved_at_tick + CAT_REMOVE_TICKS {
            despawn_buffer.push(entity);
        }
    }

    // Exploded vampires linger as dead records until every beam that
    // targeted them has finished, so late arrivals still resolve.
    for (entity, (_, state)) in world.query_mut::<(&Vampire, &VampireState)>() {
        if state.phase == VampirePhase::Exploded
            && !lasers.iter().any(|laser| laser.references(entity))
        {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
