//! Deterministic simulation engine for OVERRUN.
//!
//! Owns the hecs ECS world, runs all systems at a fixed tick rate, and
//! produces read-only `FrameSnapshot`s for the presentation layer.

pub mod engine;
pub mod systems;
pub mod targeting;
pub mod world_setup;

pub use overrun_core as core;
pub use engine::SimulationEngine;
