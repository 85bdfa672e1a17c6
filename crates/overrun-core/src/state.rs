//! Frame snapshot — the complete visible state returned from each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::modifiers::ModifierRegistry;
use crate::types::{Position, SimTime};

/// Complete simulation state handed to the presentation adapter after
/// each tick. Entity views are sorted by id for deterministic ordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub modifiers: ModifierRegistry,
    pub events: Vec<GameEvent>,
}

/// Player state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub radius: f64,
    pub health: f64,
    pub max_health: f64,
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    pub score: u64,
}

/// A live enemy for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    pub radius: f64,
    pub health: f64,
    pub max_health: f64,
}

/// A live bullet for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u32,
    pub position: Position,
    pub radius: f64,
}
