//! Builds the per-frame `FrameSnapshot` from the ECS world.
//!
//! Read-only — it never modifies the world.

use hecs::World;

use overrun_core::components::{Bullet, Collider, Enemy, Health, Id, Player, PlayerStats, Weapon};
use overrun_core::enums::GamePhase;
use overrun_core::events::GameEvent;
use overrun_core::modifiers::ModifierRegistry;
use overrun_core::state::{BulletView, EnemyView, FrameSnapshot, PlayerView};
use overrun_core::types::{Position, SimTime};

/// Build a complete frame snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    modifiers: &ModifierRegistry,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        player: build_player(world),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        modifiers: *modifiers,
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    let mut query =
        world.query::<(&Player, &Position, &Collider, &Health, &PlayerStats, &Weapon)>();
    query
        .iter()
        .next()
        .map(|(_entity, (_player, pos, collider, health, stats, weapon))| PlayerView {
            position: *pos,
            radius: collider.radius,
            health: health.current,
            max_health: health.max,
            ammo: weapon.ammo,
            max_ammo: weapon.max_ammo,
            reloading: weapon.reload.is_some(),
            score: stats.score,
        })
        .unwrap_or_default()
}

/// Enemy views, sorted by id for deterministic ordering.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = {
        let mut query = world.query::<(&Enemy, &Position, &Collider, &Health, &Id)>();
        query
            .iter()
            .map(|(_entity, (_enemy, pos, collider, health, id))| EnemyView {
                id: id.0,
                position: *pos,
                radius: collider.radius,
                health: health.current,
                max_health: health.max,
            })
            .collect()
    };
    enemies.sort_by_key(|view| view.id);
    enemies
}

/// Bullet views, sorted by id for deterministic ordering.
fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = {
        let mut query = world.query::<(&Bullet, &Position, &Collider, &Id)>();
        query
            .iter()
            .map(|(_entity, (_bullet, pos, collider, id))| BulletView {
                id: id.0,
                position: *pos,
                radius: collider.radius,
            })
            .collect()
    };
    bullets.sort_by_key(|view| view.id);
    bullets
}
