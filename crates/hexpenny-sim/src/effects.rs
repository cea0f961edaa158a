//! Engine-side timed visual effects.
//!
//! Lasers and call pulses are not entities: they are short-lived records
//! the engine advances each tick and projects into the snapshot. Beams
//! freeze their endpoints at launch time, so a target that dies or a
//! player that moves mid-flight does not bend the beam.

use hecs::Entity;

use hexpenny_core::types::Position;

/// One laser record. A laser attack spawns one Beam per live vampire,
/// each with its own Source flash at the player; each arriving Beam
/// spawns an Impact.
#[derive(Debug, Clone)]
pub enum LaserEffect {
    /// Glow frozen at the launch position while the attack plays out.
    Source { position: Position, started_at: u64 },
    /// A beam traveling from launch position to the target's launch-time
    /// position. Explodes the target on arrival, then lingers briefly.
    Beam {
        target: Entity,
        start: Position,
        end: Position,
        /// Travel progress 0..1.
        progress: f64,
        /// Tick of arrival (0 while still traveling).
        arrived_at: u64,
    },
    /// Flash at the point of arrival.
    Impact { position: Position, started_at: u64 },
}

impl LaserEffect {
    /// Whether this record still holds a reference to the given entity.
    pub fn references(&self, entity: Entity) -> bool {
        matches!(self, LaserEffect::Beam { target, .. } if *target == entity)
    }
}

/// An expanding ground ring spawned by a cat call. Rings are staggered,
/// so `start_tick` may lie in the future.
#[derive(Debug, Clone, Copy)]
pub struct CallPulse {
    pub center: Position,
    pub start_tick: u64,
}

impl CallPulse {
    /// Expansion progress at `tick`, or `None` before the ring starts.
    pub fn progress(&self, tick: u64) -> Option<f64> {
        if tick < self.start_tick {
            return None;
        }
        let age = (tick - self.start_tick) as f64;
        Some((age / hexpenny_core::constants::CALL_PULSE_DURATION_TICKS as f64).min(1.0))
    }

    /// Whether the ring has finished expanding.
    pub fn expired(&self, tick: u64) -> bool {
        tick >= self.start_tick + hexpenny_core::constants::CALL_PULSE_DURATION_TICKS
    }
}
