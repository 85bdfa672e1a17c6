//! Tuning constants for the simulation.
//!
//! Speeds are px/s and durations are seconds, converted from per-frame
//! values at the fixed tick rate.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play area ---

/// Default play-area width in pixels.
pub const DEFAULT_AREA_WIDTH: f64 = 800.0;

/// Default play-area height in pixels.
pub const DEFAULT_AREA_HEIGHT: f64 = 600.0;

/// Margin beyond the play area before a bullet is culled (pixels).
pub const BULLET_CULL_MARGIN: f64 = 50.0;

// --- Player ---

/// Player collision radius (pixels).
pub const PLAYER_RADIUS: f64 = 15.0;

/// Base player movement speed (px/s).
pub const PLAYER_MOVE_SPEED: f64 = 180.0;

/// Starting and maximum player health.
pub const PLAYER_MAX_HEALTH: f64 = 100.0;

/// Magazine capacity.
pub const PLAYER_MAX_AMMO: u32 = 30;

/// Base reload duration (seconds).
pub const PLAYER_RELOAD_SECS: f64 = 1.0;

/// Base interval between shots (seconds).
pub const PLAYER_FIRE_INTERVAL_SECS: f64 = 0.3;

/// Base bullet damage per hit.
pub const PLAYER_BULLET_DAMAGE: f64 = 10.0;

/// Recoil displacement per shot (pixels, opposite the aim direction).
pub const PLAYER_RECOIL: f64 = 5.0;

// --- Bullets ---

/// Base bullet speed (px/s).
pub const BULLET_SPEED: f64 = 420.0;

/// Base bullet radius (pixels).
pub const BULLET_RADIUS: f64 = 5.0;

/// Homing steering acceleration (px/s²).
pub const HOMING_ACCEL: f64 = 1080.0;

// --- Enemies ---

/// Enemy collision radius (pixels).
pub const ENEMY_RADIUS: f64 = 12.0;

/// Enemy health at spawn.
pub const ENEMY_MAX_HEALTH: f64 = 10.0;

/// Minimum enemy speed at spawn (px/s).
pub const ENEMY_MIN_SPEED: f64 = 60.0;

/// Maximum enemy speed at spawn (px/s).
pub const ENEMY_MAX_SPEED: f64 = 120.0;

/// Interval between enemy spawns (seconds).
pub const ENEMY_SPAWN_INTERVAL_SECS: f64 = 2.0;

/// Contact damage dealt to the player per tick of overlap.
pub const CONTACT_DAMAGE_PER_TICK: f64 = 1.0;

/// Knockback displacement on player contact (pixels, along the contact normal).
pub const KNOCKBACK_DISTANCE: f64 = 10.0;

// --- Modifier effects ---

/// Fire interval under the rapid-fire toggle (seconds).
pub const RAPID_FIRE_INTERVAL_SECS: f64 = 0.05;

/// Bullets per volley under the multi-shot toggle.
pub const MULTI_SHOT_COUNT: u32 = 3;

/// Total angular spread across a multi-shot volley (radians).
pub const MULTI_SHOT_SPREAD_RAD: f64 = 0.2;

/// Damage under the one-shot-kill toggle. Exceeds any enemy max health.
pub const ONE_SHOT_KILL_DAMAGE: f64 = 9999.0;

/// Move-speed factor under the speed-hack toggle.
pub const SPEED_HACK_FACTOR: f64 = 2.0;

/// Damage factor under the damage-multiplier toggle.
pub const DAMAGE_MULTIPLIER_FACTOR: f64 = 2.0;

/// Reload duration factor under the fast-reload toggle.
pub const FAST_RELOAD_FACTOR: f64 = 0.5;

// --- Scoring ---

/// Base score per enemy kill.
pub const KILL_SCORE: f64 = 10.0;

// --- Upgrades ---

/// Maximum level for every upgrade.
pub const UPGRADE_MAX_LEVEL: u8 = 5;

/// Bullet damage added per level.
pub const UPGRADE_DAMAGE_STEP: f64 = 2.0;

/// Move speed added per level (px/s).
pub const UPGRADE_MOVE_SPEED_STEP: f64 = 18.0;

/// Magazine capacity added per level (also tops up loaded ammo).
pub const UPGRADE_MAX_AMMO_STEP: u32 = 5;

/// Reload duration removed per level (seconds).
pub const UPGRADE_RELOAD_STEP: f64 = 0.15;

/// Reload duration floor (seconds).
pub const RELOAD_SECS_FLOOR: f64 = 0.2;

/// Fire interval removed per level (seconds).
pub const UPGRADE_FIRE_INTERVAL_STEP: f64 = 0.04;

/// Fire interval floor (seconds).
pub const FIRE_INTERVAL_FLOOR: f64 = 0.05;

/// Bullet speed added per level (px/s).
pub const UPGRADE_BULLET_SPEED_STEP: f64 = 60.0;

/// Bullet radius added per level (pixels).
pub const UPGRADE_BULLET_RADIUS_STEP: f64 = 1.0;

/// Max health added per level (heals by the same amount).
pub const UPGRADE_MAX_HEALTH_STEP: f64 = 10.0;

/// Score multiplier added per level.
pub const UPGRADE_SCORE_MULT_STEP: f64 = 0.1;

/// Recoil removed per level (pixels).
pub const UPGRADE_RECOIL_STEP: f64 = 0.5;

/// Recoil floor (pixels).
pub const RECOIL_FLOOR: f64 = 0.0;
