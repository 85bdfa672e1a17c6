//! Per-tick input sampled by the presentation adapter.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Held directional keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything the simulation reads from the player for one tick.
///
/// The adapter samples its input devices once per frame and passes the
/// result in by value; nothing here persists between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub movement: MovementInput,
    /// Pointer position in play-area coordinates.
    pub pointer: Position,
    /// Fire control held down (autofire).
    pub fire_held: bool,
    /// One-off fire request for this tick (press edge).
    pub fire_requested: bool,
}
