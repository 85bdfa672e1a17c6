//! Events emitted by the simulation for frontend feedback.

use serde::{Deserialize, Serialize};

/// Noteworthy transitions collected during a tick and drained into the
/// frame snapshot. The presentation adapter turns these into sound and
/// UI effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player fired a volley of `bullets` bullets.
    ShotFired { bullets: u32 },
    /// A reload began.
    ReloadStarted { duration_secs: f64 },
    /// A reload finished; the magazine is full again.
    ReloadComplete,
    /// An enemy was destroyed.
    EnemyKilled { id: u32, score_awarded: u64 },
    /// An enemy dealt contact damage to the player.
    PlayerHit { health_remaining: f64 },
    /// The player died; the run is over until a reset.
    GameOver { score: u64 },
}
