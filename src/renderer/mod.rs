//! 2D rendering module
//!
//! Everything is a filled rectangle; the renderer is a pure function of the
//! world state.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod shapes;
pub mod surface;

pub use scene::draw;
pub use shapes::Rect;
pub use surface::{CommandBuffer, DrawCommand, Surface};
