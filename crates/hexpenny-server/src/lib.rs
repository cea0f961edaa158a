//! Hexpenny game server.
//!
//! This crate hosts the headless simulation engine for browser clients:
//! a dedicated game loop thread runs the engine at the fixed tick rate,
//! commands arrive over WebSocket, and snapshots are broadcast back as JSON.

pub mod game_loop;
pub mod routes;
pub mod state;

pub use hexpenny_core as core;
