//! Core types and definitions for the OVERRUN simulation.
//!
//! Everything the engine and a frontend must agree on lives here:
//! components, commands, input, the modifier registry, state snapshots,
//! events, and constants. No dependency on any renderer or runtime
//! framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod modifiers;
pub mod state;
pub mod types;
