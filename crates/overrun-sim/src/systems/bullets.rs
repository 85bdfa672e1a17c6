//! Bullet steering and culling.

use hecs::{Entity, World};

use overrun_core::components::Bullet;
use overrun_core::constants::{BULLET_CULL_MARGIN, DT, HOMING_ACCEL};
use overrun_core::types::{Bounds, Position, Velocity};

use crate::targeting;

/// Steer homing bullets toward their target at constant speed.
///
/// Targets are weak references: a target that despawned, or that the
/// bullet already hit, is dropped and the nearest remaining enemy is
/// acquired in the same step. With no eligible enemy the bullet keeps
/// flying straight.
pub fn steer(world: &mut World) {
    // Collect new velocities and target bindings, then apply; the
    // acquisition scan reads the world while bullets are borrowed.
    let mut updates: Vec<(Entity, Option<Entity>, Velocity)> = Vec::new();

    {
        let mut query = world.query::<(&Bullet, &Position, &Velocity)>();
        for (entity, (bullet, pos, vel)) in query.iter() {
            if !bullet.homing {
                continue;
            }

            let target = match bullet.target {
                Some(t) if world.get::<&Position>(t).is_ok() && !bullet.hits.contains(&t) => {
                    Some(t)
                }
                _ => targeting::nearest_enemy(world, *pos, &bullet.hits),
            };

            let target_pos = match target.and_then(|t| world.get::<&Position>(t).ok().map(|p| *p))
            {
                Some(p) => p,
                None => {
                    if bullet.target.is_some() {
                        updates.push((entity, None, *vel));
                    }
                    continue;
                }
            };

            let to_target = (target_pos.as_dvec2() - pos.as_dvec2()).normalize_or_zero();
            let steered = vel.as_dvec2() + to_target * HOMING_ACCEL * DT;
            let new_vel = match steered.try_normalize() {
                Some(dir) => Velocity::from(dir * bullet.speed),
                None => *vel,
            };
            updates.push((entity, target, new_vel));
        }
    }

    for (entity, target, vel) in updates {
        if let Ok(mut bullet) = world.get::<&mut Bullet>(entity) {
            bullet.target = target;
        }
        if let Ok(mut v) = world.get::<&mut Velocity>(entity) {
            *v = vel;
        }
    }
}

/// Despawn bullets that left the play area by more than the cull
/// margin. Uses the shared despawn buffer to avoid re-allocating.
pub fn despawn_out_of_bounds(world: &mut World, bounds: Bounds, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        if bounds.outside_by(pos, BULLET_CULL_MARGIN) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
