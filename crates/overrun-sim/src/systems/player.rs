//! Player movement from held input.

use glam::DVec2;
use hecs::World;

use overrun_core::components::{Collider, Player, PlayerStats};
use overrun_core::constants::{DT, SPEED_HACK_FACTOR};
use overrun_core::enums::Modifier;
use overrun_core::input::InputState;
use overrun_core::modifiers::ModifierRegistry;
use overrun_core::types::{Bounds, Position};

/// Move the player from held directional input (or snap it to the
/// pointer under teleport), then clamp inside the play area by its
/// collision radius.
///
/// Axes are independent: diagonals run at full speed on each axis, and
/// opposite keys cancel.
pub fn run(world: &mut World, input: &InputState, modifiers: &ModifierRegistry, bounds: Bounds) {
    for (_entity, (_player, stats, collider, pos)) in
        world.query_mut::<(&Player, &PlayerStats, &Collider, &mut Position)>()
    {
        if modifiers.enabled(Modifier::Teleport) {
            *pos = input.pointer;
        } else {
            let mut dir = DVec2::ZERO;
            if input.movement.up {
                dir.y -= 1.0;
            }
            if input.movement.down {
                dir.y += 1.0;
            }
            if input.movement.left {
                dir.x -= 1.0;
            }
            if input.movement.right {
                dir.x += 1.0;
            }

            let mut speed = stats.move_speed;
            if modifiers.enabled(Modifier::SpeedHack) {
                speed *= SPEED_HACK_FACTOR;
            }

            pos.x += dir.x * speed * DT;
            pos.y += dir.y * speed * DT;
        }

        *pos = bounds.clamp_inset(*pos, collider.radius);
    }
}
