//! Actor AI for HEXPENNY.
//!
//! Implements the behavior state machines for vampires, money cats, and
//! the dog companion, plus the pure pose math that drives limb animation.
//! No ECS dependency — operates on plain data.

pub mod cat;
pub mod dog;
pub mod pose;
pub mod vampire;

pub use hexpenny_core as core;
