//! World state
//!
//! The world owns every body, the spawn counter and RNG, and the
//! running/over flag. It is created once per run with injected settings.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::{Body, BodyKind};
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    /// Terminal; never transitions back
    Over,
}

#[derive(Debug, Clone)]
pub struct World {
    /// Bodies in insertion order; index 0 is always the runner
    pub(crate) bodies: Vec<Body>,
    /// Ticks since the last obstacle spawned
    pub(crate) ticks_since_obstacle: u32,
    pub(crate) phase: GamePhase,
    /// Ticks processed while running
    pub(crate) ticks: u64,
    pub(crate) rng: Pcg32,
    settings: Settings,
    ground_y: f32,
    next_id: u32,
}

impl World {
    /// Create a world with the runner standing on the ground line
    pub fn new(settings: Settings, seed: u64) -> Self {
        let ground_y = settings.ground_y();
        let mut world = Self {
            bodies: Vec::new(),
            ticks_since_obstacle: 0,
            phase: GamePhase::Running,
            ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            settings,
            ground_y,
            next_id: 1,
        };

        let size = Vec2::new(RUNNER_WIDTH, RUNNER_HEIGHT);
        let center = Vec2::new(
            (world.settings.screen_width * RUNNER_X_RATIO).floor(),
            ground_y - RUNNER_HEIGHT / 2.0 - RUNNER_GROUND_GAP,
        );
        let id = world.next_entity_id();
        world.bodies.push(Body::runner(id, center, size));

        world
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a body; returns its entity ID
    ///
    /// Runners cannot be added: a world has exactly one.
    pub fn add_body(&mut self, center: Vec2, size: Vec2, kind: BodyKind) -> Option<u32> {
        if matches!(kind, BodyKind::Runner(_)) {
            log::warn!("Refusing to add a second runner");
            return None;
        }
        let id = self.next_entity_id();
        self.bodies.push(Body::new(id, center, size, kind));
        Some(id)
    }

    /// Spawn an obstacle at the right edge, resting on the ground line
    pub fn spawn_obstacle(&mut self) -> u32 {
        let center = Vec2::new(
            self.settings.screen_width,
            self.ground_y - OBSTACLE_SIZE / 2.0,
        );
        let id = self.next_entity_id();
        self.bodies
            .push(Body::obstacle(id, center, Vec2::splat(OBSTACLE_SIZE)));
        log::debug!("Spawned obstacle {} at tick {}", id, self.ticks);
        id
    }

    /// Spawn a cloud at the right edge with the given vertical position and size
    pub fn spawn_cloud(&mut self, y: f32, size: Vec2) -> u32 {
        let center = Vec2::new(self.settings.screen_width, y);
        let id = self.next_entity_id();
        self.bodies.push(Body::cloud(id, center, size));
        log::debug!("Spawned cloud {} ({}x{}) at y={}", id, size.x, size.y, y);
        id
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn runner(&self) -> &Body {
        &self.bodies[0]
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scroll_speed(&self) -> f32 {
        self.settings.scroll_speed
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.settings.screen_width, self.settings.screen_height)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ticks_since_obstacle(&self) -> u32 {
        self.ticks_since_obstacle
    }
}
