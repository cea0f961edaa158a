//! ECS systems that operate on the game world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — persistent state lives in
//! components or on the engine.

pub mod cat_ai;
pub mod cleanup;
pub mod combat;
pub mod dog_ai;
pub mod lasers;
pub mod particles;
pub mod player;
pub mod snapshot;
pub mod spawner;
pub mod vampire_ai;
