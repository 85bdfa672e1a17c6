//! Small enums shared across the simulation.

use serde::{Deserialize, Serialize};

/// Top-level run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing normally.
    #[default]
    Running,
    /// Clock frozen; only commands are processed.
    Paused,
    /// Player dead; waiting for a reset.
    GameOver,
}

/// Cheat toggles. Each alters one code path in the simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Fire without consuming ammo; reload state stops gating fire.
    InfiniteAmmo,
    /// Shortened fire interval.
    RapidFire,
    /// No recoil displacement when firing.
    NoRecoil,
    /// Bullet damage forced high enough to kill any enemy in one hit.
    OneShotKill,
    /// Aim at the nearest enemy instead of the pointer.
    AutoAim,
    /// Doubled movement speed.
    SpeedHack,
    /// Snap to the pointer position instead of walking.
    Teleport,
    /// Doubled bullet damage.
    DamageMultiplier,
    /// Kill score scaled by the player's score multiplier.
    PointMultiplier,
    /// Death check suppressed.
    UnlimitedHealth,
    /// Empty magazine refills instantly with no reload state.
    NoReload,
    /// Halved reload duration.
    FastReload,
    /// Zero reload duration.
    InstantReload,
    /// No angular spread on multi-shot volleys.
    NoSpread,
    /// Three bullets per volley.
    MultiShot,
    /// Bullets steer toward their acquired target.
    HomingBullets,
    /// Bullets survive hits and pass through enemies.
    Pierce,
    /// Zero enemy spawn interval (one spawn per tick).
    NoSpawnDelay,
    /// Enemy contact deals no damage (and no knockback).
    NoEnemyDamage,
    /// Enemy contact deals damage but no knockback.
    NoKnockback,
}

/// Per-run stat upgrades. Levels only go up, capped at `UPGRADE_MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Upgrade {
    BulletDamage,
    MoveSpeed,
    MaxAmmo,
    ReloadTime,
    FireInterval,
    BulletSpeed,
    BulletRadius,
    MaxHealth,
    ScoreMultiplier,
    RecoilDamping,
}
