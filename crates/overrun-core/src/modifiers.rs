//! Runtime modifier registry: cheat toggles plus per-run upgrade levels.
//!
//! One flat registry covers both kinds, since upgrades are just modifiers
//! with integer levels instead of booleans. Named fields (no maps) keep
//! snapshot JSON field-ordered and deterministic.

use serde::{Deserialize, Serialize};

use crate::constants::UPGRADE_MAX_LEVEL;
use crate::enums::{Modifier, Upgrade};

/// Cheat toggle states. All default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModToggles {
    pub infinite_ammo: bool,
    pub rapid_fire: bool,
    pub no_recoil: bool,
    pub one_shot_kill: bool,
    pub auto_aim: bool,
    pub speed_hack: bool,
    pub teleport: bool,
    pub damage_multiplier: bool,
    pub point_multiplier: bool,
    pub unlimited_health: bool,
    pub no_reload: bool,
    pub fast_reload: bool,
    pub instant_reload: bool,
    pub no_spread: bool,
    pub multi_shot: bool,
    pub homing_bullets: bool,
    pub pierce: bool,
    pub no_spawn_delay: bool,
    pub no_enemy_damage: bool,
    pub no_knockback: bool,
}

/// Upgrade levels, one counter per upgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    pub bullet_damage: u8,
    pub move_speed: u8,
    pub max_ammo: u8,
    pub reload_time: u8,
    pub fire_interval: u8,
    pub bullet_speed: u8,
    pub bullet_radius: u8,
    pub max_health: u8,
    pub score_multiplier: u8,
    pub recoil_damping: u8,
}

/// The complete modifier registry.
///
/// Owned by the engine, mutated only through queued commands; systems
/// read it during a tick but never write it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierRegistry {
    pub toggles: ModToggles,
    pub upgrades: UpgradeLevels,
}

impl ModifierRegistry {
    /// Whether a toggle is currently on.
    pub fn enabled(&self, modifier: Modifier) -> bool {
        let t = &self.toggles;
        match modifier {
            Modifier::InfiniteAmmo => t.infinite_ammo,
            Modifier::RapidFire => t.rapid_fire,
            Modifier::NoRecoil => t.no_recoil,
            Modifier::OneShotKill => t.one_shot_kill,
            Modifier::AutoAim => t.auto_aim,
            Modifier::SpeedHack => t.speed_hack,
            Modifier::Teleport => t.teleport,
            Modifier::DamageMultiplier => t.damage_multiplier,
            Modifier::PointMultiplier => t.point_multiplier,
            Modifier::UnlimitedHealth => t.unlimited_health,
            Modifier::NoReload => t.no_reload,
            Modifier::FastReload => t.fast_reload,
            Modifier::InstantReload => t.instant_reload,
            Modifier::NoSpread => t.no_spread,
            Modifier::MultiShot => t.multi_shot,
            Modifier::HomingBullets => t.homing_bullets,
            Modifier::Pierce => t.pierce,
            Modifier::NoSpawnDelay => t.no_spawn_delay,
            Modifier::NoEnemyDamage => t.no_enemy_damage,
            Modifier::NoKnockback => t.no_knockback,
        }
    }

    /// Set a toggle. Takes effect from the next simulation step.
    pub fn set(&mut self, modifier: Modifier, enabled: bool) {
        let t = &mut self.toggles;
        match modifier {
            Modifier::InfiniteAmmo => t.infinite_ammo = enabled,
            Modifier::RapidFire => t.rapid_fire = enabled,
            Modifier::NoRecoil => t.no_recoil = enabled,
            Modifier::OneShotKill => t.one_shot_kill = enabled,
            Modifier::AutoAim => t.auto_aim = enabled,
            Modifier::SpeedHack => t.speed_hack = enabled,
            Modifier::Teleport => t.teleport = enabled,
            Modifier::DamageMultiplier => t.damage_multiplier = enabled,
            Modifier::PointMultiplier => t.point_multiplier = enabled,
            Modifier::UnlimitedHealth => t.unlimited_health = enabled,
            Modifier::NoReload => t.no_reload = enabled,
            Modifier::FastReload => t.fast_reload = enabled,
            Modifier::InstantReload => t.instant_reload = enabled,
            Modifier::NoSpread => t.no_spread = enabled,
            Modifier::MultiShot => t.multi_shot = enabled,
            Modifier::HomingBullets => t.homing_bullets = enabled,
            Modifier::Pierce => t.pierce = enabled,
            Modifier::NoSpawnDelay => t.no_spawn_delay = enabled,
            Modifier::NoEnemyDamage => t.no_enemy_damage = enabled,
            Modifier::NoKnockback => t.no_knockback = enabled,
        }
    }

    /// Current level of an upgrade.
    pub fn level(&self, upgrade: Upgrade) -> u8 {
        let u = &self.upgrades;
        match upgrade {
            Upgrade::BulletDamage => u.bullet_damage,
            Upgrade::MoveSpeed => u.move_speed,
            Upgrade::MaxAmmo => u.max_ammo,
            Upgrade::ReloadTime => u.reload_time,
            Upgrade::FireInterval => u.fire_interval,
            Upgrade::BulletSpeed => u.bullet_speed,
            Upgrade::BulletRadius => u.bullet_radius,
            Upgrade::MaxHealth => u.max_health,
            Upgrade::ScoreMultiplier => u.score_multiplier,
            Upgrade::RecoilDamping => u.recoil_damping,
        }
    }

    /// Raise an upgrade one level. Returns the new level, or `None` if
    /// the upgrade was already at the cap (nothing changes).
    pub fn increment(&mut self, upgrade: Upgrade) -> Option<u8> {
        let u = &mut self.upgrades;
        let level = match upgrade {
            Upgrade::BulletDamage => &mut u.bullet_damage,
            Upgrade::MoveSpeed => &mut u.move_speed,
            Upgrade::MaxAmmo => &mut u.max_ammo,
            Upgrade::ReloadTime => &mut u.reload_time,
            Upgrade::FireInterval => &mut u.fire_interval,
            Upgrade::BulletSpeed => &mut u.bullet_speed,
            Upgrade::BulletRadius => &mut u.bullet_radius,
            Upgrade::MaxHealth => &mut u.max_health,
            Upgrade::ScoreMultiplier => &mut u.score_multiplier,
            Upgrade::RecoilDamping => &mut u.recoil_damping,
        };
        if *level >= UPGRADE_MAX_LEVEL {
            return None;
        }
        *level += 1;
        Some(*level)
    }

    /// Zero all upgrade levels (run reset). Toggles are untouched.
    pub fn reset_upgrades(&mut self) {
        self.upgrades = UpgradeLevels::default();
    }
}
