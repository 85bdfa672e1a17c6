//! Firing, recoil, and reload handling for the player weapon.

use glam::DVec2;
use hecs::World;

use overrun_core::components::{Bullet, Collider, Id, Player, Weapon};
use overrun_core::constants::{
    DAMAGE_MULTIPLIER_FACTOR, DT, FAST_RELOAD_FACTOR, MULTI_SHOT_COUNT, MULTI_SHOT_SPREAD_RAD,
    ONE_SHOT_KILL_DAMAGE, RAPID_FIRE_INTERVAL_SECS,
};
use overrun_core::enums::Modifier;
use overrun_core::events::GameEvent;
use overrun_core::input::InputState;
use overrun_core::modifiers::ModifierRegistry;
use overrun_core::types::{Position, Velocity};

use crate::targeting;

/// Fire a volley when the fire gate passes: fire input held or
/// requested, cooldown elapsed, a round available (or infinite ammo),
/// and no reload in progress (infinite ammo ignores reload state).
///
/// One round covers the whole volley. Bullets spawn on the player's
/// rim along their flight direction; recoil then kicks the player
/// opposite the base aim, and an emptied magazine starts a reload.
pub fn fire(
    world: &mut World,
    input: &InputState,
    modifiers: &ModifierRegistry,
    next_id: &mut u32,
    elapsed_secs: f64,
    events: &mut Vec<GameEvent>,
) {
    if !input.fire_held && !input.fire_requested {
        return;
    }

    let infinite_ammo = modifiers.enabled(Modifier::InfiniteAmmo);

    // Gate against a copy of the weapon state; mutation happens after
    // the bullets are spawned.
    let player = {
        let mut query = world.query::<(&Player, &Position, &Collider, &Weapon)>();
        query.iter().next().map(|(entity, (_player, pos, collider, weapon))| {
            (entity, *pos, collider.radius, *weapon)
        })
    };
    let (player, origin, rim, weapon) = match player {
        Some(p) => p,
        None => return,
    };

    let interval = if modifiers.enabled(Modifier::RapidFire) {
        RAPID_FIRE_INTERVAL_SECS
    } else {
        weapon.fire_interval_secs
    };
    if let Some(last) = weapon.last_shot_at {
        if elapsed_secs - last < interval {
            return;
        }
    }
    if weapon.ammo == 0 && !infinite_ammo {
        return;
    }
    if weapon.reload.is_some() && !infinite_ammo {
        return;
    }

    let aim = aim_direction(world, origin, input.pointer, modifiers.enabled(Modifier::AutoAim));

    let damage = if modifiers.enabled(Modifier::OneShotKill) {
        ONE_SHOT_KILL_DAMAGE
    } else if modifiers.enabled(Modifier::DamageMultiplier) {
        weapon.damage * DAMAGE_MULTIPLIER_FACTOR
    } else {
        weapon.damage
    };

    let count = if modifiers.enabled(Modifier::MultiShot) {
        MULTI_SHOT_COUNT
    } else {
        1
    };
    let spread = if modifiers.enabled(Modifier::NoSpread) {
        0.0
    } else {
        MULTI_SHOT_SPREAD_RAD
    };
    let pierce = modifiers.enabled(Modifier::Pierce);
    let homing = modifiers.enabled(Modifier::HomingBullets);

    let base_angle = aim.y.atan2(aim.x);
    for i in 0..count {
        // Symmetric fan across the volley; a single bullet flies the
        // base angle exactly.
        let angle = if count > 1 {
            base_angle + spread * (i as f64 / (count - 1) as f64 - 0.5)
        } else {
            base_angle
        };
        let dir = DVec2::from_angle(angle);

        world.spawn((
            Bullet {
                damage,
                speed: weapon.bullet_speed,
                pierce,
                homing,
                target: None,
                hits: Vec::new(),
            },
            Position::from(origin.as_dvec2() + dir * rim),
            Velocity::from(dir * weapon.bullet_speed),
            Collider {
                radius: weapon.bullet_radius,
            },
            Id(*next_id),
        ));
        *next_id += 1;
    }

    events.push(GameEvent::ShotFired { bullets: count });

    if !modifiers.enabled(Modifier::NoRecoil) && weapon.recoil > 0.0 {
        if let Ok(mut pos) = world.get::<&mut Position>(player) {
            pos.x -= aim.x * weapon.recoil;
            pos.y -= aim.y * weapon.recoil;
        }
    }

    if let Ok(mut weapon) = world.get::<&mut Weapon>(player) {
        weapon.last_shot_at = Some(elapsed_secs);

        if !infinite_ammo {
            weapon.ammo -= 1;
            if weapon.ammo == 0 {
                if modifiers.enabled(Modifier::NoReload) {
                    weapon.ammo = weapon.max_ammo;
                } else {
                    let duration = reload_duration(&weapon, modifiers);
                    weapon.reload = Some(duration);
                    events.push(GameEvent::ReloadStarted {
                        duration_secs: duration,
                    });
                }
            }
        }
    }
}

/// Count an active reload down by one tick and refill the magazine
/// when it completes. Runs right after `fire`, so a zero-duration
/// reload finishes within the same tick it started.
pub fn update_reload(world: &mut World, events: &mut Vec<GameEvent>) {
    for (_entity, (_player, weapon)) in world.query_mut::<(&Player, &mut Weapon)>() {
        if let Some(remaining) = weapon.reload {
            let remaining = remaining - DT;
            if remaining <= 0.0 {
                weapon.reload = None;
                weapon.ammo = weapon.max_ammo;
                events.push(GameEvent::ReloadComplete);
            } else {
                weapon.reload = Some(remaining);
            }
        }
    }
}

/// Aim direction for a volley. Auto-aim targets the nearest enemy and
/// ignores the pointer entirely; without it the pointer leads. Falls
/// back to +x when there is nothing to aim at or the direction is
/// degenerate.
fn aim_direction(world: &World, origin: Position, pointer: Position, auto_aim: bool) -> DVec2 {
    let toward = if auto_aim {
        let nearest = targeting::nearest_enemy(world, origin, &[])
            .and_then(|enemy| world.get::<&Position>(enemy).ok().map(|pos| *pos));
        match nearest {
            Some(pos) => pos,
            None => return DVec2::X,
        }
    } else {
        pointer
    };

    match (toward.as_dvec2() - origin.as_dvec2()).try_normalize() {
        Some(dir) => dir,
        None => DVec2::X,
    }
}

/// Effective reload duration under the reload toggles.
fn reload_duration(weapon: &Weapon, modifiers: &ModifierRegistry) -> f64 {
    if modifiers.enabled(Modifier::InstantReload) {
        0.0
    } else if modifiers.enabled(Modifier::FastReload) {
        weapon.reload_secs * FAST_RELOAD_FACTOR
    } else {
        weapon.reload_secs
    }
}
