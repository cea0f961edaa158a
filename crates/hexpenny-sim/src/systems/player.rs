//! Player controller: camera-relative movement, attack and call triggers,
//! and the chase camera.

use hecs::{Entity, World};

use hexpenny_core::commands::InputState;
use hexpenny_core::components::*;
use hexpenny_core::config::GameConfig;
use hexpenny_core::constants::*;
use hexpenny_core::enums::{CameraMode, CatPhase};
use hexpenny_core::events::GameEvent;
use hexpenny_core::types::Position;

use crate::effects::{CallPulse, LaserEffect};

/// Camera state owned by the engine, updated alongside the player.
#[derive(Debug, Clone)]
pub struct CameraState {
    pub mode: CameraMode,
    pub position: Position,
    pub look_at: Position,
    pub free_position: Position,
    pub free_look_at: Position,
    pub viewport: (u32, u32),
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            mode: CameraMode::default(),
            position: Position::new(0.0, CAMERA_HEIGHT, -CAMERA_DISTANCE),
            look_at: Position::default(),
            free_position: Position::new(0.0, CAMERA_HEIGHT, -CAMERA_DISTANCE),
            free_look_at: Position::default(),
            viewport: (1280, 720),
        }
    }
}

/// Run the player controller for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    input: &InputState,
    camera: &mut CameraState,
    lasers: &mut Vec<LaserEffect>,
    call_pulses: &mut Vec<CallPulse>,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
    tick: u64,
) {
    // Movement is relative to the camera's ground-plane forward vector.
    let (fx, fz) = camera_forward(camera);
    // right = forward x up
    let (rx, rz) = (-fz, fx);

    let mut fire_laser = false;
    let mut start_call = false;
    let player_pos;
    let player_yaw;

    {
        let Some((_, (_, pos, heading, state))) = world
            .query_mut::<(&Player, &mut Position, &mut Heading, &mut PlayerState)>()
            .into_iter()
            .next()
        else {
            return;
        };

        // Orbit keys steer the player's facing (chase camera trails it)
        if camera.mode == CameraMode::Follow {
            if input.orbit_left {
                heading.yaw += config.camera_rotation_speed;
            }
            if input.orbit_right {
                heading.yaw -= config.camera_rotation_speed;
            }
        }

        let mut mx = 0.0;
        let mut mz = 0.0;
        if input.forward {
            mx += fx;
            mz += fz;
        }
        if input.backward {
            mx -= fx;
            mz -= fz;
        }
        if input.left {
            mx -= rx;
            mz -= rz;
        }
        if input.right {
            mx += rx;
            mz += rz;
        }

        state.is_moving =
            input.forward || input.backward || input.left || input.right;

        let len = (mx * mx + mz * mz).sqrt();
        if len > f64::EPSILON {
            mx /= len;
            mz /= len;
            let (x, z) = config.arena.clamp(
                pos.x + mx * config.player_move_speed,
                pos.z + mz * config.player_move_speed,
            );
            pos.x = x;
            pos.z = z;
            // Face the direction of travel
            heading.yaw = mx.atan2(mz);
        }

        state.anim_time += PLAYER_ANIM_RATE;

        // Melee is level-triggered; laser and call are edge-triggered
        // against their own busy flags.
        state.is_attacking = input.melee;

        if input.laser && !state.is_laser_attacking {
            state.is_laser_attacking = true;
            state.last_laser_tick = tick;
            fire_laser = true;
        }

        if input.call && !state.is_calling_cats {
            state.is_calling_cats = true;
            state.call_until_tick = tick + CAT_CALL_DURATION_TICKS;
            start_call = true;
        }
        if state.is_calling_cats && tick >= state.call_until_tick {
            state.is_calling_cats = false;
        }

        player_pos = *pos;
        player_yaw = heading.yaw;
    }

    if fire_laser {
        fire_lasers(world, lasers, events, &player_pos, tick);
    }
    if start_call {
        call_cats(world, call_pulses, events, &player_pos, tick);
    }

    update_camera(camera, &player_pos, player_yaw, config);
}

/// The camera's forward direction projected onto the ground, normalized.
fn camera_forward(camera: &CameraState) -> (f64, f64) {
    let fx = camera.look_at.x - camera.position.x;
    let fz = camera.look_at.z - camera.position.z;
    let len = (fx * fx + fz * fz).sqrt();
    if len < f64::EPSILON {
        // Degenerate pose (camera directly overhead) — default to +z
        return (0.0, 1.0);
    }
    (fx / len, fz / len)
}

/// Launch one beam at every live vampire, plus the source flash.
fn fire_lasers(
    world: &World,
    lasers: &mut Vec<LaserEffect>,
    events: &mut Vec<GameEvent>,
    player_pos: &Position,
    tick: u64,
) {
    let start = Position::new(player_pos.x, LASER_BEAM_HEIGHT, player_pos.z);
    let targets: Vec<(Entity, Position)> = world
        .query::<(&Vampire, &Position, &VampireState)>()
        .iter()
        .filter(|(_, (_, _, state))| {
            state.phase != hexpenny_core::enums::VampirePhase::Exploded
        })
        .map(|(entity, (_, pos, _))| {
            (entity, Position::new(pos.x, LASER_BEAM_HEIGHT, pos.z))
        })
        .collect();

    if targets.is_empty() {
        return;
    }

    let beam_count = targets.len() as u32;
    for (target, end) in targets {
        lasers.push(LaserEffect::Beam {
            target,
            start,
            end,
            progress: 0.0,
            arrived_at: 0,
        });
        lasers.push(LaserEffect::Source {
            position: start,
            started_at: tick,
        });
    }
    events.push(GameEvent::LaserAttack { beam_count });
    log::debug!("laser attack, {beam_count} beams");
}

/// Flip every unsaved cat to Called and ring the ground pulses.
fn call_cats(
    world: &mut World,
    call_pulses: &mut Vec<CallPulse>,
    events: &mut Vec<GameEvent>,
    player_pos: &Position,
    tick: u64,
) {
    let mut cats_called = 0u32;
    for (_, (_, state)) in world.query_mut::<(&MoneyCat, &mut CatState)>() {
        if state.phase != CatPhase::Saved {
            state.phase = CatPhase::Called;
            cats_called += 1;
        }
    }

    let center = Position::new(player_pos.x, 0.01, player_pos.z);
    for i in 0..CALL_PULSE_COUNT as u64 {
        call_pulses.push(CallPulse {
            center,
            start_tick: tick + i * CALL_PULSE_STAGGER_TICKS,
        });
    }

    events.push(GameEvent::CatCall { cats_called });
    log::debug!("cat call, {cats_called} cats answering");
}

/// Advance the camera toward its target pose.
fn update_camera(camera: &mut CameraState, player_pos: &Position, yaw: f64, config: &GameConfig) {
    match camera.mode {
        CameraMode::Follow => {
            let target = Position::new(
                player_pos.x - yaw.sin() * config.camera_distance,
                player_pos.y + config.camera_height,
                player_pos.z - yaw.cos() * config.camera_distance,
            );
            camera.position = camera.position.lerp(&target, config.camera_smoothness);
            camera.look_at = camera.look_at.lerp(player_pos, config.camera_smoothness);
        }
        CameraMode::Free => {
            camera.position = camera.free_position;
            camera.look_at = camera.free_look_at;
        }
    }
}
