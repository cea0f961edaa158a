//! Dog companion behavior.
//!
//! While the player is not attacking, the dog trails a follow point behind
//! them. While the player attacks, the dog goes feral: it hunts the nearest
//! live vampire if one is within range, and otherwise tears circles around
//! the player. Bites are reported back for the combat system to resolve.

use hexpenny_core::constants::*;
use hexpenny_core::enums::DogMode;
use hexpenny_core::types::{Arena, Position};

/// Input to the dog behavior.
pub struct DogContext {
    pub position: Position,
    pub yaw: f64,
    /// The dog's animation clock (also phases the circling orbit).
    pub anim_time: f64,
    pub player_position: Position,
    /// Follow point trailing behind the player.
    pub target: Position,
    pub player_is_attacking: bool,
    /// Nearest live vampire, if any.
    pub nearest_vampire: Option<Position>,
    pub follow_speed: f64,
    pub arena: Arena,
}

/// Output from the dog behavior.
pub struct DogUpdate {
    pub mode: DogMode,
    pub x: f64,
    pub z: f64,
    pub yaw: f64,
    /// True when the dog reached a vampire this tick (bite range).
    pub bite: bool,
}

/// Evaluate one tick of dog behavior.
pub fn evaluate(ctx: &DogContext) -> DogUpdate {
    let mut update = DogUpdate {
        mode: DogMode::Follow,
        x: ctx.position.x,
        z: ctx.position.z,
        yaw: ctx.yaw,
        bite: false,
    };

    if ctx.player_is_attacking {
        if let Some(vampire) = ctx.nearest_vampire {
            let distance = ctx.position.ground_distance_to(&vampire);
            if distance < DOG_HUNT_RANGE {
                // Hunt: charge the nearest vampire
                update.mode = DogMode::Hunt;
                let dx = vampire.x - ctx.position.x;
                let dz = vampire.z - ctx.position.z;
                let len = (dx * dx + dz * dz).sqrt();
                if len > f64::EPSILON {
                    let speed = ctx.follow_speed * DOG_HUNT_SPEED_FACTOR;
                    let (x, z) = ctx.arena.clamp(
                        ctx.position.x + dx / len * speed,
                        ctx.position.z + dz / len * speed,
                    );
                    update.x = x;
                    update.z = z;
                    update.yaw = dx.atan2(dz);
                    update.bite = distance < DOG_BITE_RANGE;
                }
                return update;
            }
        }

        // Circle: orbit the player until a vampire comes in range
        update.mode = DogMode::Circle;
        let angle = ctx.anim_time * DOG_CIRCLE_RATE;
        let goal_x = ctx.player_position.x + angle.cos() * DOG_CIRCLE_RADIUS;
        let goal_z = ctx.player_position.z + angle.sin() * DOG_CIRCLE_RADIUS;
        let dx = goal_x - ctx.position.x;
        let dz = goal_z - ctx.position.z;
        let len = (dx * dx + dz * dz).sqrt();
        if len > DOG_TARGET_EPSILON {
            let speed = ctx.follow_speed * DOG_CIRCLE_SPEED_FACTOR;
            let (x, z) = ctx.arena.clamp(
                ctx.position.x + dx / len * speed,
                ctx.position.z + dz / len * speed,
            );
            update.x = x;
            update.z = z;
            update.yaw = dx.atan2(dz);
        }
        return update;
    }

    // Follow: trot toward the follow point, stop once close enough
    let dx = ctx.target.x - ctx.position.x;
    let dz = ctx.target.z - ctx.position.z;
    let len = (dx * dx + dz * dz).sqrt();
    if len > DOG_TARGET_EPSILON {
        let (x, z) = ctx.arena.clamp(
            ctx.position.x + dx / len * ctx.follow_speed,
            ctx.position.z + dz / len * ctx.follow_speed,
        );
        update.x = x;
        update.z = z;
        update.yaw = dx.atan2(dz);
    }
    update
}
