//! Sky Runner - A side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Simulation (bodies, collisions, world tick)
//! - `renderer`: 2D fill-rect rendering onto any `Surface`
//! - `engine`: Frame loop glue (one tick + one draw per frame)
//! - `settings`: Injected configuration (screen size, speed, colors)

pub mod engine;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::{Engine, LoopControl};
pub use error::ConfigError;
pub use settings::{Palette, Settings};

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const DEFAULT_SCREEN_WIDTH: f32 = 800.0;
    pub const DEFAULT_SCREEN_HEIGHT: f32 = 400.0;

    /// Pixels per tick that obstacles scroll left (clouds move at half)
    pub const DEFAULT_SCROLL_SPEED: f32 = 4.0;

    /// Fraction of screen height above the ground line
    pub const GROUND_RATIO: f32 = 0.8;

    /// Runner defaults
    pub const RUNNER_WIDTH: f32 = 20.0;
    pub const RUNNER_HEIGHT: f32 = 30.0;
    /// Horizontal position as a fraction of screen width
    pub const RUNNER_X_RATIO: f32 = 0.2;
    /// Gap between the runner's feet and the ground line
    pub const RUNNER_GROUND_GAP: f32 = 2.0;
    /// Upward velocity applied on jump (pixels/tick)
    pub const JUMP_VELOCITY: f32 = 15.0;
    /// Velocity lost per tick while airborne
    pub const GRAVITY: f32 = 1.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 30.0;
    /// Spawn chance gained per tick since the last obstacle
    pub const OBSTACLE_RAMP_PER_TICK: f32 = 0.0001;

    /// Cloud defaults
    pub const CLOUD_SPAWN_CHANCE: f32 = 0.01;
    pub const CLOUD_MIN_WIDTH: f32 = 10.0;
    pub const CLOUD_MAX_WIDTH: f32 = 110.0;
    pub const CLOUD_MIN_HEIGHT: f32 = 10.0;
    pub const CLOUD_MAX_HEIGHT: f32 = 60.0;
}
