//! Entity spawn factories.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use overrun_core::components::{Collider, Enemy, Health, Id, Player, PlayerStats, Weapon};
use overrun_core::constants::{
    BULLET_RADIUS, BULLET_SPEED, ENEMY_MAX_HEALTH, ENEMY_MAX_SPEED, ENEMY_MIN_SPEED,
    ENEMY_RADIUS, PLAYER_BULLET_DAMAGE, PLAYER_FIRE_INTERVAL_SECS, PLAYER_MAX_AMMO,
    PLAYER_MAX_HEALTH, PLAYER_MOVE_SPEED, PLAYER_RADIUS, PLAYER_RECOIL, PLAYER_RELOAD_SECS,
};
use overrun_core::types::{Bounds, Position, Velocity};

/// Spawn the player at the play-area center with base stats and a full
/// magazine.
pub fn spawn_player(world: &mut World, bounds: Bounds) -> Entity {
    world.spawn((
        Player,
        bounds.center(),
        Collider {
            radius: PLAYER_RADIUS,
        },
        Health {
            current: PLAYER_MAX_HEALTH,
            max: PLAYER_MAX_HEALTH,
        },
        PlayerStats {
            move_speed: PLAYER_MOVE_SPEED,
            score: 0,
            score_multiplier: 1.0,
        },
        Weapon {
            ammo: PLAYER_MAX_AMMO,
            max_ammo: PLAYER_MAX_AMMO,
            damage: PLAYER_BULLET_DAMAGE,
            fire_interval_secs: PLAYER_FIRE_INTERVAL_SECS,
            last_shot_at: None,
            reload_secs: PLAYER_RELOAD_SECS,
            reload: None,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            recoil: PLAYER_RECOIL,
        },
    ))
}

/// Spawn one enemy just outside a random edge of the play area, with a
/// random speed, heading for the center.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bounds: Bounds,
    next_id: &mut u32,
) -> Entity {
    // One diameter outside so the enemy walks in rather than pops in.
    let offset = ENEMY_RADIUS * 2.0;
    let side: u8 = rng.gen_range(0..4);
    let position = match side {
        0 => Position::new(rng.gen_range(0.0..bounds.width), -offset),
        1 => Position::new(rng.gen_range(0.0..bounds.width), bounds.height + offset),
        2 => Position::new(-offset, rng.gen_range(0.0..bounds.height)),
        _ => Position::new(bounds.width + offset, rng.gen_range(0.0..bounds.height)),
    };
    let speed = rng.gen_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);

    let heading = (bounds.center().as_dvec2() - position.as_dvec2()).normalize_or_zero() * speed;

    let id = Id(*next_id);
    *next_id += 1;

    world.spawn((
        Enemy { speed },
        position,
        Velocity::from(heading),
        Collider {
            radius: ENEMY_RADIUS,
        },
        Health {
            current: ENEMY_MAX_HEALTH,
            max: ENEMY_MAX_HEALTH,
        },
        id,
    ))
}

/// Spawn an enemy at an exact position with a fixed speed and health
/// (for scenario tests).
#[cfg(test)]
pub fn spawn_enemy_at(
    world: &mut World,
    position: Position,
    speed: f64,
    health: f64,
    next_id: &mut u32,
) -> Entity {
    let id = Id(*next_id);
    *next_id += 1;

    world.spawn((
        Enemy { speed },
        position,
        Velocity::default(),
        Collider {
            radius: ENEMY_RADIUS,
        },
        Health {
            current: health,
            max: health,
        },
        id,
    ))
}
