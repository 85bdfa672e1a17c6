//! Velocity integration.

use hecs::World;

use overrun_core::constants::DT;
use overrun_core::types::{Position, Velocity};

/// Integrate velocity into position for every moving entity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}
