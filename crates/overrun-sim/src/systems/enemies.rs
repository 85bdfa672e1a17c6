//! Enemy behavior: seeking the player and contact damage.

use glam::DVec2;
use hecs::World;

use overrun_core::components::{Collider, Enemy, Health, Player};
use overrun_core::constants::{CONTACT_DAMAGE_PER_TICK, KNOCKBACK_DISTANCE};
use overrun_core::enums::Modifier;
use overrun_core::events::GameEvent;
use overrun_core::modifiers::ModifierRegistry;
use overrun_core::types::{Position, Velocity};

/// Point every enemy's velocity straight at the player's current
/// position at the enemy's own speed. An enemy exactly on top of the
/// player holds still.
pub fn seek(world: &mut World) {
    let player_pos = {
        let mut query = world.query::<(&Player, &Position)>();
        query.iter().next().map(|(_, (_, pos))| *pos)
    };
    let player_pos = match player_pos {
        Some(pos) => pos,
        None => return,
    };

    for (_entity, (enemy, pos, vel)) in world.query_mut::<(&Enemy, &Position, &mut Velocity)>() {
        let dir = (player_pos.as_dvec2() - pos.as_dvec2()).normalize_or_zero();
        *vel = Velocity::from(dir * enemy.speed);
    }
}

/// Apply contact damage and knockback for every enemy overlapping the
/// player.
///
/// Knockback pushes the player along the contact normal, away from the
/// enemy. The no-enemy-damage toggle suppresses the whole contact
/// response, knockback included; no-knockback leaves only the damage.
pub fn contact(world: &mut World, modifiers: &ModifierRegistry, events: &mut Vec<GameEvent>) {
    if modifiers.enabled(Modifier::NoEnemyDamage) {
        return;
    }

    let player = {
        let mut query = world.query::<(&Player, &Position, &Collider)>();
        query
            .iter()
            .next()
            .map(|(entity, (_, pos, collider))| (entity, *pos, collider.radius))
    };
    let (player, player_pos, player_radius) = match player {
        Some(p) => p,
        None => return,
    };

    // Collect contact normals first; applying them moves the player.
    let mut contacts: Vec<DVec2> = Vec::new();
    {
        let mut query = world.query::<(&Enemy, &Position, &Collider)>();
        for (_entity, (_enemy, pos, collider)) in query.iter() {
            let reach = player_radius + collider.radius;
            if player_pos.distance_sq_to(pos) < reach * reach {
                contacts.push((player_pos.as_dvec2() - pos.as_dvec2()).normalize_or_zero());
            }
        }
    }

    let knockback = !modifiers.enabled(Modifier::NoKnockback);

    for normal in contacts {
        if let Ok(mut health) = world.get::<&mut Health>(player) {
            health.current = (health.current - CONTACT_DAMAGE_PER_TICK).max(0.0);
            events.push(GameEvent::PlayerHit {
                health_remaining: health.current,
            });
        }
        if knockback {
            if let Ok(mut pos) = world.get::<&mut Position>(player) {
                pos.x += normal.x * KNOCKBACK_DISTANCE;
                pos.y += normal.y * KNOCKBACK_DISTANCE;
            }
        }
    }
}
