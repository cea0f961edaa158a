//! Game engine — the core of the simulation.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless (no server dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hexpenny_core::commands::{InputState, PlayerCommand};
use hexpenny_core::config::GameConfig;
use hexpenny_core::enums::GamePhase;
use hexpenny_core::events::GameEvent;
use hexpenny_core::state::GameStateSnapshot;
use hexpenny_core::types::SimTime;

use crate::effects::{CallPulse, LaserEffect};
use crate::systems;
use crate::systems::player::CameraState;
use crate::world_setup;

/// The game engine. Owns the ECS world and all simulation state.
pub struct GameEngine {
    world: World,
    config: GameConfig,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    input: InputState,
    camera: CameraState,
    score: u32,
    lasers: Vec<LaserEffect>,
    call_pulses: Vec<CallPulse>,
    last_spawn_tick: u64,
    last_sweep_tick: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new engine with the given config.
    pub fn new(config: GameConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputState::default(),
            camera: CameraState::default(),
            score: config.starting_money,
            lasers: Vec::new(),
            call_pulses: Vec::new(),
            last_spawn_tick: 0,
            last_sweep_tick: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.camera,
            &self.lasers,
            &self.call_pulses,
            self.score,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the current money points.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the active laser records.
    #[cfg(test)]
    pub fn lasers(&self) -> &[LaserEffect] {
        &self.lasers
    }

    /// Spawn a stationary vampire at a fixed spot (for tests).
    #[cfg(test)]
    pub fn spawn_vampire_at(&mut self, x: f64, z: f64) -> hecs::Entity {
        use hexpenny_core::components::{Heading, Vampire, VampireState};
        use hexpenny_core::types::Position;
        self.world.spawn((
            Vampire,
            Position::new(x, 0.0, z),
            Heading::default(),
            VampireState {
                phase: Default::default(),
                direction: glam::DVec2::new(0.0, 1.0),
                speed: 0.0,
                next_turn_tick: u64::MAX,
                anim_time: 0.0,
            },
        ))
    }

    /// Spawn a fearless, stationary cat at a fixed spot (for tests).
    #[cfg(test)]
    pub fn spawn_cat_at(&mut self, x: f64, z: f64, money_value: u32) -> hecs::Entity {
        use hexpenny_core::components::{CatState, Heading, MoneyCat};
        use hexpenny_core::constants::CAT_BASE_Y;
        use hexpenny_core::types::Position;
        self.world.spawn((
            MoneyCat,
            Position::new(x, CAT_BASE_Y, z),
            Heading::default(),
            CatState {
                phase: Default::default(),
                saved_at_tick: 0,
                move_speed: 0.0,
                scared_distance: 0.0,
                money_value,
            },
        ))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_game();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetInput { input } => {
                self.input = input;
            }
            PlayerCommand::SetCameraMode { mode } => {
                self.camera.mode = mode;
            }
            PlayerCommand::SetFreeCamera {
                x,
                y,
                z,
                look_x,
                look_y,
                look_z,
            } => {
                self.camera.free_position = hexpenny_core::types::Position::new(x, y, z);
                self.camera.free_look_at =
                    hexpenny_core::types::Position::new(look_x, look_y, look_z);
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SetMoveSpeed { speed } => {
                self.config.player_move_speed = speed.clamp(0.05, 0.5);
            }
            PlayerCommand::SetViewport { width, height } => {
                self.camera.viewport = (width.max(1), height.max(1));
            }
        }
    }

    /// Reset all per-game state and populate a fresh world.
    fn start_game(&mut self) {
        self.world = World::new();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.time = SimTime::default();
        self.score = self.config.starting_money;
        self.input = InputState::default();
        self.camera = CameraState {
            mode: self.camera.mode,
            viewport: self.camera.viewport,
            ..CameraState::default()
        };
        self.lasers.clear();
        self.call_pulses.clear();
        self.last_spawn_tick = 0;
        self.last_sweep_tick = 0;
        self.events.clear();

        world_setup::setup_game(&mut self.world, &mut self.rng, &self.config);
        self.phase = GamePhase::Active;
        log::info!("game started, seed {}", self.config.seed);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let tick = self.time.tick;
        let arena = self.config.arena;

        // 1. Player controller (movement, attack/call triggers, camera)
        systems::player::run(
            &mut self.world,
            &self.input,
            &mut self.camera,
            &mut self.lasers,
            &mut self.call_pulses,
            &mut self.events,
            &self.config,
            tick,
        );
        // 2. Combat resolver (throttled proximity sweep)
        systems::combat::run(
            &mut self.world,
            &mut self.rng,
            &mut self.score,
            &mut self.events,
            &self.config,
            tick,
            &mut self.last_sweep_tick,
        );
        // 3. Vampire wander
        systems::vampire_ai::run(&mut self.world, &mut self.rng, &arena, tick);
        // 4. Cat behavior (roam/flee/called, rescue, float timeline)
        systems::cat_ai::run(
            &mut self.world,
            &mut self.rng,
            &mut self.score,
            &mut self.events,
            &arena,
            tick,
        );
        // 5. Dog behavior (follow/hunt/circle, bites)
        systems::dog_ai::run(
            &mut self.world,
            &mut self.rng,
            &mut self.score,
            &mut self.events,
            &self.config,
        );
        // 6. Laser travel and detonation
        systems::lasers::run(
            &mut self.world,
            &mut self.rng,
            &mut self.score,
            &mut self.events,
            &mut self.lasers,
            &self.config,
            tick,
        );
        // 7. Particle integration
        systems::particles::run(&mut self.world);
        // 8. Vampire respawn
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.events,
            &self.config,
            tick,
            &mut self.last_spawn_tick,
        );
        // 9. Cleanup (spent particles, removed cats, dead vampires)
        systems::cleanup::run(&mut self.world, &self.lasers, &mut self.despawn_buffer, tick);

        // Expired call rings
        self.call_pulses.retain(|pulse| !pulse.expired(tick));
    }
}
