//! Bullet-enemy collision resolution, kill sweep, and scoring.

use hecs::{Entity, World};

use overrun_core::components::{Bullet, Collider, Enemy, Health, Id, Player, PlayerStats};
use overrun_core::constants::KILL_SCORE;
use overrun_core::enums::Modifier;
use overrun_core::events::GameEvent;
use overrun_core::modifiers::ModifierRegistry;
use overrun_core::types::Position;

/// Resolve bullet hits against enemies, then sweep dead enemies and
/// award kill score.
///
/// A bullet damages any given enemy at most once, tracked in its hit
/// set. Piercing bullets continue through; others despawn on the first
/// hit. An enemy lethally hit by two bullets in one tick dies once and
/// scores once.
pub fn run(
    world: &mut World,
    modifiers: &ModifierRegistry,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    // Overlap tests run on positions captured at entry; damage and hit
    // sets are applied through fresh borrows per pair.
    let bullets: Vec<(Entity, Position, f64, f64, bool)> = {
        let mut query = world.query::<(&Bullet, &Position, &Collider)>();
        query
            .iter()
            .map(|(entity, (bullet, pos, collider))| {
                (entity, *pos, collider.radius, bullet.damage, bullet.pierce)
            })
            .collect()
    };
    let enemies: Vec<(Entity, Position, f64)> = {
        let mut query = world.query::<(&Enemy, &Position, &Collider)>();
        query
            .iter()
            .map(|(entity, (_enemy, pos, collider))| (entity, *pos, collider.radius))
            .collect()
    };

    for (bullet_entity, bullet_pos, bullet_radius, damage, pierce) in bullets {
        for &(enemy_entity, enemy_pos, enemy_radius) in &enemies {
            let reach = bullet_radius + enemy_radius;
            if bullet_pos.distance_sq_to(&enemy_pos) >= reach * reach {
                continue;
            }

            let already_hit = match world.get::<&Bullet>(bullet_entity) {
                Ok(bullet) => bullet.hits.contains(&enemy_entity),
                Err(_) => break,
            };
            if already_hit {
                continue;
            }

            if let Ok(mut health) = world.get::<&mut Health>(enemy_entity) {
                health.current = (health.current - damage).max(0.0);
            } else {
                continue;
            }
            if let Ok(mut bullet) = world.get::<&mut Bullet>(bullet_entity) {
                bullet.hits.push(enemy_entity);
            }

            if !pierce {
                despawn_buffer.push(bullet_entity);
                break;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Kill sweep: remove dead enemies, then credit the player.
    let kills: Vec<(Entity, u32)> = {
        let mut query = world.query::<(&Enemy, &Health, &Id)>();
        query
            .iter()
            .filter(|(_, (_, health, _))| health.current <= 0.0)
            .map(|(entity, (_, _, id))| (entity, id.0))
            .collect()
    };
    if kills.is_empty() {
        return;
    }

    let award = {
        let mut query = world.query::<(&Player, &PlayerStats)>();
        let multiplier = query
            .iter()
            .next()
            .map(|(_, (_, stats))| stats.score_multiplier)
            .unwrap_or(1.0);
        let factor = if modifiers.enabled(Modifier::PointMultiplier) {
            multiplier
        } else {
            1.0
        };
        (KILL_SCORE * factor).round() as u64
    };

    for &(entity, id) in &kills {
        let _ = world.despawn(entity);
        events.push(GameEvent::EnemyKilled {
            id,
            score_awarded: award,
        });
    }

    for (_entity, (_player, stats)) in world.query_mut::<(&Player, &mut PlayerStats)>() {
        stats.score += award * kills.len() as u64;
    }
}
