//! Server state shared across route handlers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use hexpenny_core::commands::PlayerCommand;
use hexpenny_core::state::GameStateSnapshot;

/// Commands sent from the connection handlers to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared server state. Handlers run on the tokio runtime, so everything
/// here must be Send + Sync:
/// - `mpsc::Sender` is Send but not Sync, hence the `Mutex` wrapper
/// - the latest snapshot is shared with the game loop thread via `Arc<Mutex<...>>`
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: Mutex<mpsc::Sender<GameLoopCommand>>,
    /// Latest snapshot for synchronous `/api/snapshot` queries.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Broadcast channel carrying serialized snapshots to every client.
    pub snapshot_tx: broadcast::Sender<String>,
}

impl AppState {
    pub fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
        snapshot_tx: broadcast::Sender<String>,
    ) -> Self {
        Self {
            command_tx: Mutex::new(command_tx),
            latest_snapshot,
            snapshot_tx,
        }
    }
}
