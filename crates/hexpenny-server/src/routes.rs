//! HTTP and WebSocket route handlers.
//!
//! Clients connect to `/ws`, receive the latest snapshot immediately, then a
//! JSON snapshot every tick. Text frames sent by the client are parsed as
//! `PlayerCommand`s and forwarded to the game loop thread.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use futures::{sink::SinkExt, stream::StreamExt};

use hexpenny_core::commands::PlayerCommand;
use hexpenny_core::enums::GamePhase;
use hexpenny_core::state::GameStateSnapshot;

use crate::state::{AppState, GameLoopCommand};

/// Maximum accepted client frame size. Commands are tiny; anything bigger
/// is a misbehaving client.
const MAX_MESSAGE_SIZE: usize = 4 * 1024;

/// Build the router with all routes attached.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/snapshot", get(get_snapshot))
        .route("/api/status", get(get_status))
        .with_state(state)
}

/// REST endpoint: the latest snapshot (for polling / initial page load).
async fn get_snapshot(State(state): State<Arc<AppState>>) -> Json<Option<GameStateSnapshot>> {
    match state.latest_snapshot.lock() {
        Ok(lock) => Json(lock.clone()),
        Err(e) => {
            tracing::error!("Failed to lock snapshot mutex: {}", e);
            Json(None)
        }
    }
}

/// REST endpoint: server status summary.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let (phase, tick) = match state.latest_snapshot.lock() {
        Ok(lock) => lock
            .as_ref()
            .map(|snap| (snap.phase, snap.time.tick))
            .unwrap_or((GamePhase::MainMenu, 0)),
        Err(e) => {
            tracing::error!("Failed to lock snapshot mutex: {}", e);
            (GamePhase::MainMenu, 0)
        }
    };

    Json(serde_json::json!({
        "clients": state.snapshot_tx.receiver_count(),
        "phase": phase,
        "tick": tick,
    }))
}

async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| websocket(socket, state))
}

async fn websocket(stream: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = stream.split();

    // Catch the client up before the next tick lands
    let initial = match state.latest_snapshot.lock() {
        Ok(lock) => lock
            .as_ref()
            .and_then(|snap| serde_json::to_string(snap).ok()),
        Err(e) => {
            tracing::error!("Failed to lock snapshot mutex: {}", e);
            None
        }
    };
    if let Some(json) = initial {
        let _ = sender.send(Message::Text(json)).await;
    }

    // Forward every tick's snapshot to this client. A lagged receiver just
    // skips ahead; stale frames are worthless anyway.
    let mut rx = state.snapshot_tx.subscribe();
    let send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(json) => {
                    if sender.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!("Client lagged, skipped {} snapshots", skipped);
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    tracing::info!("Client connected");

    while let Some(Ok(message)) = receiver.next().await {
        if let Message::Text(text) = message {
            if text.len() > MAX_MESSAGE_SIZE {
                tracing::warn!(
                    "Dropping oversized frame: {} bytes (max: {})",
                    text.len(),
                    MAX_MESSAGE_SIZE
                );
                continue;
            }

            match serde_json::from_str::<PlayerCommand>(&text) {
                Ok(command) => {
                    let send_result = match state.command_tx.lock() {
                        Ok(tx) => tx.send(GameLoopCommand::Player(command)),
                        Err(e) => {
                            tracing::error!("Failed to lock command sender: {}", e);
                            continue;
                        }
                    };
                    if send_result.is_err() {
                        tracing::error!("Game loop is gone, closing connection");
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Ignoring unparseable command: {}", e);
                }
            }
        }
    }

    send_task.abort();
    tracing::info!("Client disconnected");
}
