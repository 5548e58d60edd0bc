//! Frame loop glue
//!
//! The host calls `Engine::frame` once per display refresh. Each call runs
//! exactly one world tick and one draw, and tells the host whether to
//! schedule another frame.

use crate::error::ConfigError;
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{InputState, World};

/// Whether the host should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

#[derive(Debug, Clone)]
pub struct Engine {
    world: World,
    input: InputState,
    frames: u64,
}

impl Engine {
    /// Validate settings and build the world
    ///
    /// `seed` is used unless the settings pin one.
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or(seed);
        log::info!(
            "Starting run: {}x{} screen, scroll speed {}, seed {}",
            settings.screen_width,
            settings.screen_height,
            settings.scroll_speed,
            seed
        );
        Ok(Self {
            world: World::new(settings, seed),
            input: InputState::new(),
            frames: 0,
        })
    }

    /// Forward a host key event
    pub fn key_event(&mut self, code: u32, pressed: bool) {
        self.input.set_key(code, pressed);
    }

    /// Drop all held keys (e.g. on window blur)
    pub fn release_keys(&mut self) {
        self.input.clear();
    }

    /// Run one tick and draw the result
    ///
    /// Once the run is over this does nothing and keeps returning `Stop`.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> LoopControl {
        if self.world.is_over() {
            return LoopControl::Stop;
        }

        self.world.update(&self.input);
        renderer::draw(surface, &self.world);
        self.input.end_frame();
        self.frames += 1;

        if self.world.is_over() {
            log::info!("Run ended after {} frames", self.frames);
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    /// Drive frames back to back until the run ends or `max_frames` is hit
    ///
    /// Returns the number of frames run by this call.
    pub fn run_headless<S: Surface + ?Sized>(&mut self, surface: &mut S, max_frames: u64) -> u64 {
        let mut ran = 0;
        while ran < max_frames {
            ran += 1;
            if self.frame(surface) == LoopControl::Stop {
                break;
            }
        }
        ran
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::CommandBuffer;
    use crate::sim::{BodyKind, keys};

    #[test]
    fn test_rejects_bad_settings() {
        let settings = Settings::with_screen(-5.0, 400.0);
        assert!(matches!(
            Engine::new(settings, 1),
            Err(ConfigError::InvalidScreen { .. })
        ));
    }

    #[test]
    fn test_pinned_seed_wins() {
        let settings = Settings {
            seed: Some(77),
            invincible: true,
            ..Settings::default()
        };
        let mut a = Engine::new(settings.clone(), 1).unwrap();
        let mut b = Engine::new(settings, 2).unwrap();
        let mut surface = CommandBuffer::new();
        a.run_headless(&mut surface, 3_000);
        b.run_headless(&mut surface, 3_000);

        let ids_a: Vec<_> = a.world().bodies().iter().map(|b| b.id).collect();
        let ids_b: Vec<_> = b.world().bodies().iter().map(|b| b.id).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_frame_ticks_and_draws() {
        let mut engine = Engine::new(Settings::default(), 1).unwrap();
        let mut surface = CommandBuffer::new();

        assert_eq!(engine.frame(&mut surface), LoopControl::Continue);
        assert_eq!(engine.world().ticks(), 1);
        assert_eq!(engine.frames(), 1);
        // Sky, ground, and at least the runner
        assert!(surface.fills().len() >= 3);
    }

    #[test]
    fn test_key_edges_cleared_each_frame() {
        let mut engine = Engine::new(Settings::default(), 1).unwrap();
        let mut surface = CommandBuffer::new();

        engine.key_event(keys::SPACE, true);
        assert!(engine.input().was_pressed(keys::SPACE));
        engine.frame(&mut surface);
        assert!(!engine.input().was_pressed(keys::SPACE));
        assert!(engine.input().is_down(keys::SPACE));
        assert!(engine.world().runner().runner_state().unwrap().is_jumping);

        engine.release_keys();
        assert!(!engine.input().is_down(keys::SPACE));
    }

    #[test]
    fn test_stops_on_game_over() {
        let mut engine = Engine::new(Settings::default(), 1).unwrap();
        let runner = engine.world().runner().center;
        let speed = engine.world().scroll_speed();
        engine
            .world
            .add_body(
                runner + glam::Vec2::new(speed, 0.0),
                glam::Vec2::splat(30.0),
                BodyKind::Obstacle,
            )
            .unwrap();

        let mut surface = CommandBuffer::new();
        let ran = engine.run_headless(&mut surface, 1_000);
        assert_eq!(ran, 1);
        assert!(engine.world().is_over());
        // Final frame is still drawn
        assert!(!surface.commands.is_empty());
    }

    #[test]
    fn test_frames_after_over_are_inert() {
        let mut engine = Engine::new(Settings::default(), 1).unwrap();
        let runner = engine.world().runner().center;
        engine
            .world
            .add_body(runner, glam::Vec2::splat(30.0), BodyKind::Obstacle)
            .unwrap();

        let mut surface = CommandBuffer::new();
        assert_eq!(engine.frame(&mut surface), LoopControl::Stop);
        assert_eq!(engine.frames(), 1);

        surface.clear();
        for _ in 0..10 {
            assert_eq!(engine.frame(&mut surface), LoopControl::Stop);
        }
        assert_eq!(engine.frames(), 1);
        assert_eq!(engine.world().ticks(), 1);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_headless_respects_frame_cap() {
        let settings = Settings {
            invincible: true,
            ..Settings::default()
        };
        let mut engine = Engine::new(settings, 5).unwrap();
        let mut surface = CommandBuffer::new();
        assert_eq!(engine.run_headless(&mut surface, 250), 250);
        assert_eq!(engine.world().ticks(), 250);
    }
}
