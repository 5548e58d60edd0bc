//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order, runner first)

pub mod body;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use body::{Body, BodyKind, RunnerState, TickContext};
pub use collision::{boxes_overlap, colliding};
pub use input::{InputState, keys};
pub use state::{GamePhase, World};
pub use tick::tick;
