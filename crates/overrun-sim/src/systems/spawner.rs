//! Interval-based enemy spawning.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use overrun_core::constants::ENEMY_SPAWN_INTERVAL_SECS;
use overrun_core::enums::Modifier;
use overrun_core::modifiers::ModifierRegistry;
use overrun_core::types::Bounds;

use crate::world_setup;

/// Tracks when the most recent enemy spawned.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimer {
    /// Elapsed-seconds stamp of the last spawn.
    pub last_spawn_at: f64,
}

/// Spawn one enemy whenever the spawn interval has elapsed.
///
/// The no-spawn-delay toggle zeroes the interval, which puts one fresh
/// enemy on the field every tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    modifiers: &ModifierRegistry,
    bounds: Bounds,
    next_id: &mut u32,
    elapsed_secs: f64,
) {
    let interval = if modifiers.enabled(Modifier::NoSpawnDelay) {
        0.0
    } else {
        ENEMY_SPAWN_INTERVAL_SECS
    };

    if elapsed_secs - timer.last_spawn_at >= interval {
        world_setup::spawn_enemy(world, rng, bounds, next_id);
        timer.last_spawn_at = elapsed_secs;
    }
}
