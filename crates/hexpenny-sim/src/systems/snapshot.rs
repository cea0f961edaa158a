//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot. This system is read-only — it never modifies
//! the world.

use hecs::World;

use hexpenny_core::components::*;
use hexpenny_core::constants::*;
use hexpenny_core::enums::{CatPhase, GamePhase, VampirePhase};
use hexpenny_core::events::GameEvent;
use hexpenny_core::state::*;
use hexpenny_core::types::{Position, SimTime};

use hexpenny_actor_ai::pose;

use crate::effects::{CallPulse, LaserEffect};
use crate::systems::player::CameraState;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    camera: &CameraState,
    lasers: &[LaserEffect],
    call_pulses: &[CallPulse],
    score: u32,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = build_player(world);
    let vampires = build_vampires(world);
    let cats = build_cats(world, time.tick);
    let active_vampire_count = vampires
        .iter()
        .filter(|v| v.phase != VampirePhase::Exploded)
        .count() as u32;
    let saved_cat_count = cats
        .iter()
        .filter(|c| c.phase == CatPhase::Saved)
        .count() as u32;

    GameStateSnapshot {
        time: *time,
        phase,
        camera: CameraView {
            mode: camera.mode,
            position: camera.position,
            look_at: camera.look_at,
        },
        dog: build_dog(world, player.is_attacking),
        particles: build_particles(world),
        laser_sources: build_laser_sources(lasers, time.tick),
        laser_beams: build_laser_beams(lasers),
        laser_impacts: build_laser_impacts(lasers, time.tick),
        call_pulses: build_call_pulses(call_pulses, time.tick),
        hud: HudView {
            money_points: score,
            attack_mode_on: player.is_attacking,
            active_vampire_count,
            saved_cat_count,
        },
        player,
        vampires,
        cats,
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Heading, &PlayerState)>()
        .iter()
        .next()
        .map(|(_, (_, pos, heading, state))| {
            let limbs = pose::player_pose(state.anim_time, state.is_attacking, state.is_moving);
            PlayerView {
                position: *pos,
                yaw: heading.yaw,
                is_attacking: state.is_attacking,
                is_laser_attacking: state.is_laser_attacking,
                is_calling_cats: state.is_calling_cats,
                is_moving: state.is_moving,
                right_arm_angle: limbs.right_arm_angle,
                left_arm_angle: limbs.left_arm_angle,
                broom_tilt: limbs.broom_tilt,
                leg_swing: limbs.leg_swing,
            }
        })
        .unwrap_or_default()
}

fn build_vampires(world: &World) -> Vec<VampireView> {
    let mut vampires: Vec<VampireView> = world
        .query::<(&Vampire, &Position, &Heading, &VampireState)>()
        .iter()
        .map(|(entity, (_, pos, heading, state))| VampireView {
            id: entity.id(),
            position: *pos,
            yaw: heading.yaw,
            phase: state.phase,
            limb_swing: pose::vampire_limb_swing(state.anim_time),
        })
        .collect();
    vampires.sort_by_key(|v| v.id);
    vampires
}

fn build_cats(world: &World, tick: u64) -> Vec<CatView> {
    let mut cats: Vec<CatView> = world
        .query::<(&MoneyCat, &Position, &Heading, &CatState)>()
        .iter()
        .map(|(entity, (_, pos, heading, state))| {
            let opacity = if state.phase == CatPhase::Saved {
                // Fully visible while floating, then a linear fade
                let age = tick.saturating_sub(state.saved_at_tick);
                if age <= CAT_FLOAT_TICKS {
                    1.0
                } else {
                    let fade = (age - CAT_FLOAT_TICKS) as f64
                        / (CAT_REMOVE_TICKS - CAT_FLOAT_TICKS) as f64;
                    (1.0 - fade).max(0.0)
                }
            } else {
                1.0
            };
            CatView {
                id: entity.id(),
                position: *pos,
                yaw: heading.yaw,
                phase: state.phase,
                float_height: (pos.y - CAT_BASE_Y).max(0.0),
                opacity,
                money_value: state.money_value,
            }
        })
        .collect();
    cats.sort_by_key(|c| c.id);
    cats
}

fn build_dog(world: &World, player_is_attacking: bool) -> DogView {
    world
        .query::<(&Dog, &Position, &Heading, &DogState)>()
        .iter()
        .next()
        .map(|(_, (_, pos, heading, state))| {
            let limbs = pose::dog_pose(state.anim_time, player_is_attacking);
            DogView {
                position: *pos,
                yaw: heading.yaw,
                mode: state.mode,
                bob: limbs.bob,
                tail_angle: limbs.tail_angle,
                leg_angle: limbs.leg_angle,
                head_tilt: limbs.head_tilt,
            }
        })
        .unwrap_or_default()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(_, (pos, particle))| ParticleView {
            position: *pos,
            kind: particle.kind,
        })
        .collect()
}

fn build_laser_sources(lasers: &[LaserEffect], tick: u64) -> Vec<LaserSourceView> {
    lasers
        .iter()
        .filter_map(|laser| match laser {
            LaserEffect::Source {
                position,
                started_at,
            } => Some(LaserSourceView {
                position: *position,
                age: (tick.saturating_sub(*started_at)) as f64 / LASER_DURATION_TICKS as f64,
            }),
            _ => None,
        })
        .collect()
}

fn build_laser_beams(lasers: &[LaserEffect]) -> Vec<LaserBeamView> {
    lasers
        .iter()
        .filter_map(|laser| match laser {
            LaserEffect::Beam {
                start,
                end,
                progress,
                ..
            } => Some(LaserBeamView {
                start: *start,
                head: start.lerp(end, *progress),
                target: *end,
                progress: *progress,
            }),
            _ => None,
        })
        .collect()
}

fn build_laser_impacts(lasers: &[LaserEffect], tick: u64) -> Vec<LaserImpactView> {
    lasers
        .iter()
        .filter_map(|laser| match laser {
            LaserEffect::Impact {
                position,
                started_at,
            } => Some(LaserImpactView {
                position: *position,
                age: (tick.saturating_sub(*started_at)) as f64 / LASER_IMPACT_TICKS as f64,
            }),
            _ => None,
        })
        .collect()
}

fn build_call_pulses(call_pulses: &[CallPulse], tick: u64) -> Vec<CallPulseView> {
    call_pulses
        .iter()
        .filter_map(|pulse| {
            pulse.progress(tick).map(|progress| CallPulseView {
                center: pulse.center,
                progress,
                opacity: 0.7 * (1.0 - progress),
            })
        })
        .collect()
}
