//! Components attached to hecs entities.
//!
//! Plain data only; the behavior belongs to the systems in the sim
//! crate.

use serde::{Deserialize, Serialize};

/// Marks the player entity (singleton).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Seek speed toward the player (px/s), rolled at spawn.
    pub speed: f64,
}

/// Per-bullet state.
///
/// Target and hit references are weak: they are validated through the
/// world on every use and go stale harmlessly when an enemy despawns.
/// Not serialized — snapshots expose bullets through `BulletView`.
#[derive(Debug, Clone)]
pub struct Bullet {
    /// Damage applied per enemy hit.
    pub damage: f64,
    /// Base speed the velocity is renormalized to after homing steering (px/s).
    pub speed: f64,
    /// Survives hits and passes through enemies.
    pub pierce: bool,
    /// Steers toward an acquired target.
    pub homing: bool,
    /// Current homing target, re-acquired lazily when it despawns.
    pub target: Option<hecs::Entity>,
    /// Enemies this bullet has already damaged (each at most once).
    pub hits: Vec<hecs::Entity>,
}

/// Circular collision footprint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    /// Radius in pixels.
    pub radius: f64,
}

/// Hit points. Damage saturates at zero; `0 <= current <= max` always.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Player progression and movement stats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Walk speed (px/s).
    pub move_speed: f64,
    /// Accumulated score for this run.
    pub score: u64,
    /// Kill-score factor applied under the point-multiplier toggle.
    pub score_multiplier: f64,
}

/// Player weapon state: magazine, timing, and bullet parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Rounds loaded.
    pub ammo: u32,
    /// Magazine capacity.
    pub max_ammo: u32,
    /// Damage per bullet before toggle adjustments.
    pub damage: f64,
    /// Minimum seconds between shots.
    pub fire_interval_secs: f64,
    /// Elapsed-seconds stamp of the last shot. `None` until the first shot.
    pub last_shot_at: Option<f64>,
    /// Base reload duration (seconds).
    pub reload_secs: f64,
    /// Remaining reload time. `None` when not reloading.
    pub reload: Option<f64>,
    /// Speed of spawned bullets (px/s).
    pub bullet_speed: f64,
    /// Radius of spawned bullets (pixels).
    pub bullet_radius: f64,
    /// Recoil displacement per shot (pixels).
    pub recoil: f64,
}

/// Stable small identifier assigned from the engine's counter.
/// Snapshot views are sorted by it for deterministic ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Id(pub u32);
