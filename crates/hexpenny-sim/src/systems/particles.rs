//! Particle system: integrates debris and sparkle motion.

use hecs::World;

use hexpenny_core::components::Particle;
use hexpenny_core::types::Position;

/// Advance every particle by one tick. Expiry and culling happen in the
/// cleanup system.
pub fn run(world: &mut World) {
    for (_, (pos, particle)) in world.query_mut::<(&mut Position, &mut Particle)>() {
        pos.x += particle.velocity.x;
        pos.y += particle.velocity.y;
        pos.z += particle.velocity.z;
        particle.velocity.y -= particle.gravity;
    }
}
