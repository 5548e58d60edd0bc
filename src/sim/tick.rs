//! World tick
//!
//! One call advances the world by one frame: spawn, move, collide, prune.

use glam::Vec2;
use rand::Rng;

use super::body::TickContext;
use super::collision::colliding;
use super::input::InputState;
use super::state::{GamePhase, World};
use crate::consts::*;

impl World {
    /// Advance the world by one tick (no-op once the run is over)
    pub fn update(&mut self, input: &InputState) {
        tick(self, input);
    }
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &InputState) {
    if world.phase == GamePhase::Over {
        return;
    }

    world.ticks += 1;

    spawn_bodies(world);

    let ctx = TickContext {
        scroll_speed: world.scroll_speed(),
        input,
    };
    let invincible = world.settings().invincible;

    // Bodies spawned above move on the same tick they appear
    for i in 0..world.bodies.len() {
        world.bodies[i].update(&ctx);

        if colliding(&world.bodies[0], &world.bodies[i]) {
            if invincible {
                log::trace!(
                    "Ignoring collision with body {} (invincible)",
                    world.bodies[i].id
                );
            } else if world.phase == GamePhase::Running {
                world.phase = GamePhase::Over;
                log::info!(
                    "Game over: hit body {} after {} ticks",
                    world.bodies[i].id,
                    world.ticks
                );
            }
        }
    }

    world.bodies.retain(|b| !b.is_off_screen());
}

/// Roll for a new obstacle and a new cloud
fn spawn_bodies(world: &mut World) {
    // Chance grows without bound the longer no obstacle has appeared
    let obstacle_chance = world.ticks_since_obstacle as f32 * OBSTACLE_RAMP_PER_TICK;
    if world.rng.random::<f32>() < obstacle_chance {
        world.spawn_obstacle();
        world.ticks_since_obstacle = 0;
    } else {
        world.ticks_since_obstacle += 1;
    }

    if world.rng.random::<f32>() < CLOUD_SPAWN_CHANCE {
        let half_height = world.settings().screen_height / 2.0;
        let y = (world.rng.random::<f32>() * half_height).floor();
        let size = Vec2::new(
            world.rng.random_range(CLOUD_MIN_WIDTH..CLOUD_MAX_WIDTH),
            world.rng.random_range(CLOUD_MIN_HEIGHT..CLOUD_MAX_HEIGHT),
        );
        world.spawn_cloud(y, size);
    }
}
