//! Game loop thread — runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are serialized once per tick
//! and fanned out over a tokio broadcast channel, and the latest one is stored
//! in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::sync::broadcast;

use hexpenny_core::config::GameConfig;
use hexpenny_core::constants::TICK_RATE;
use hexpenny_core::state::GameStateSnapshot;
use hexpenny_sim::engine::GameEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the connection handlers to use.
pub fn spawn_game_loop(
    config: GameConfig,
    snapshot_tx: broadcast::Sender<String>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("hexpenny-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, snapshot_tx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: GameConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: broadcast::Sender<String>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Broadcast to connected clients, skipping serialization when idle
        if snapshot_tx.receiver_count() > 0 {
            match serde_json::to_string(&snapshot) {
                Ok(json) => {
                    let _ = snapshot_tx.send(json);
                }
                Err(e) => tracing::error!("Failed to serialize snapshot: {}", e),
            }
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexpenny_core::commands::PlayerCommand;
    use hexpenny_core::enums::GamePhase;

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.queue_command(PlayerCommand::StartGame);

        // Run enough ticks to populate entities
        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_pause_resume_via_commands() {
        let mut engine = GameEngine::new(GameConfig::default());

        engine.queue_command(PlayerCommand::StartGame);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Active);

        engine.queue_command(PlayerCommand::Pause);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
        let paused_tick = snap.time.tick;

        // Tick while paused — time should not advance
        let snap = engine.tick();
        assert_eq!(snap.time.tick, paused_tick);

        engine.queue_command(PlayerCommand::Resume);
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Active);
        assert!(snap.time.tick > paused_tick);
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let (snap_tx, _snap_rx) = broadcast::channel(16);
        let latest = Arc::new(Mutex::new(None));
        let cmd_tx = spawn_game_loop(GameConfig::default(), snap_tx, latest.clone());

        // Give the loop a few ticks, then shut it down
        std::thread::sleep(Duration::from_millis(50));
        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
        std::thread::sleep(Duration::from_millis(50));

        // The loop ticked at least once before exiting, and its receiver is gone
        assert!(latest.lock().unwrap().is_some());
        assert!(cmd_tx.send(GameLoopCommand::Shutdown).is_err());
    }
}
