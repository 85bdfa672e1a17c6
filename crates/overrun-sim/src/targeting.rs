//! Nearest-enemy selection, shared by auto-aim and homing acquisition.

use hecs::{Entity, World};

use overrun_core::components::Enemy;
use overrun_core::types::Position;

/// Find the live enemy nearest to `from`, skipping entities listed in
/// `exclude`.
///
/// Single pass over squared distances; a strict comparison keeps the
/// first candidate found on an exact tie. Returns `None` when no
/// eligible enemy exists.
pub fn nearest_enemy(world: &World, from: Position, exclude: &[Entity]) -> Option<Entity> {
    let mut best: Option<(Entity, f64)> = None;

    let mut query = world.query::<(&Enemy, &Position)>();
    for (entity, (_enemy, pos)) in query.iter() {
        if exclude.contains(&entity) {
            continue;
        }
        let dist_sq = from.distance_sq_to(pos);
        match best {
            Some((_, best_sq)) if dist_sq >= best_sq => {}
            _ => best = Some((entity, dist_sq)),
        }
    }

    best.map(|(entity, _)| entity)
}
