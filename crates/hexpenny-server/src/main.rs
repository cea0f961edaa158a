use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexpenny_core::config::GameConfig;
use hexpenny_server::game_loop;
use hexpenny_server::routes;
use hexpenny_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "hexpenny_server=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = GameConfig::default();
    if let Some(seed) = std::env::var("HEXPENNY_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
    {
        tracing::info!("Using seed {} from HEXPENNY_SEED", seed);
        config.seed = seed;
    }

    // Snapshots are ~60/s per client; a shallow buffer keeps laggards from
    // hoarding stale frames
    let (snapshot_tx, _rx) = broadcast::channel::<String>(32);
    let latest_snapshot = Arc::new(Mutex::new(None));

    let command_tx = game_loop::spawn_game_loop(config, snapshot_tx.clone(), latest_snapshot.clone());

    let state = Arc::new(AppState::new(command_tx, latest_snapshot, snapshot_tx));
    let app = routes::router(state);
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("Hexpenny server listening on {}", addr);
    tracing::info!("    WebSocket:    ws://{}/ws", addr);
    tracing::info!("    Snapshot API: http://{}/api/snapshot", addr);
    tracing::info!("    Status API:   http://{}/api/status", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
