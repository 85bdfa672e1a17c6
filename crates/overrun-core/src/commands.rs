//! Commands the frontend sends into the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so a
//! toggle flipped mid-frame takes effect on exactly the next step.

use serde::{Deserialize, Serialize};

use crate::enums::{Modifier, Upgrade};

/// The full set of player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Modifiers ---
    /// Turn a cheat toggle on or off.
    SetModifier { modifier: Modifier, enabled: bool },
    /// Raise an upgrade by one level and apply its stat change.
    /// No-op at the level cap.
    IncrementUpgrade { upgrade: Upgrade },

    // --- Run control ---
    /// Start a fresh run: clear enemies and bullets, respawn the player
    /// with base stats, zero the score and upgrade levels, reset the
    /// clock. Cheat toggles persist across resets.
    ResetGame,
    /// Freeze the simulation clock.
    Pause,
    /// Unfreeze the simulation clock.
    Resume,
}
