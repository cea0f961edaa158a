//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// One-shot events drained into each snapshot for the frontend sound/FX layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A vampire exploded (melee, laser impact, or dog bite).
    VampireExploded { position: Position },
    /// A vampire touched the player while no attack was active.
    MoneyLost { amount: u32 },
    /// A cat was rescued.
    CatSaved { money_value: u32 },
    /// A laser attack was fired at every live vampire.
    LaserAttack { beam_count: u32 },
    /// The player called the cats.
    CatCall { cats_called: u32 },
    /// A new vampire entered the arena.
    VampireSpawned { position: Position },
}
