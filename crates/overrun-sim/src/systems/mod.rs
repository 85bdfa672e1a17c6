//! Simulation systems, run in a fixed order every tick.
//!
//! Each system is a free function over the world plus whatever engine
//! state it needs. Systems that both scan and mutate collect first and
//! apply after, keeping hecs borrows disjoint.

pub mod bullets;
pub mod collision;
pub mod enemies;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod spawner;
pub mod weapon;
