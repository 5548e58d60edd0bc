//! Bodies: every positioned, sized thing in the world
//!
//! A body is a centered axis-aligned box plus per-kind motion rules.
//! Identity is the entity ID, never the field values.

use glam::Vec2;

use super::input::{InputState, keys};
use crate::consts::*;

/// Per-tick inputs a body's motion rule may read
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub scroll_speed: f32,
    pub input: &'a InputState,
}

/// Vertical state of the controlled runner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerState {
    /// Center y when standing on the ground
    pub rest_y: f32,
    /// Upward velocity (pixels/tick, positive = rising)
    pub vertical_velocity: f32,
    pub is_jumping: bool,
}

impl RunnerState {
    pub fn at_rest(rest_y: f32) -> Self {
        Self {
            rest_y,
            vertical_velocity: 0.0,
            is_jumping: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyKind {
    Runner(RunnerState),
    /// Scrolls left at full speed
    Obstacle,
    /// Scrolls left at half speed, never collides
    Cloud,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: u32,
    pub center: Vec2,
    /// Width (x) and height (y), both non-negative
    pub size: Vec2,
    pub kind: BodyKind,
}

impl Body {
    /// Panics on negative or non-finite geometry; callers construct bodies
    /// from constants and bounded random ranges only.
    pub fn new(id: u32, center: Vec2, size: Vec2, kind: BodyKind) -> Self {
        assert!(
            center.is_finite() && size.is_finite() && size.x >= 0.0 && size.y >= 0.0,
            "invalid body geometry: center={center}, size={size}"
        );
        Self {
            id,
            center,
            size,
            kind,
        }
    }

    pub fn runner(id: u32, center: Vec2, size: Vec2) -> Self {
        Self::new(id, center, size, BodyKind::Runner(RunnerState::at_rest(center.y)))
    }

    pub fn obstacle(id: u32, center: Vec2, size: Vec2) -> Self {
        Self::new(id, center, size, BodyKind::Obstacle)
    }

    pub fn cloud(id: u32, center: Vec2, size: Vec2) -> Self {
        Self::new(id, center, size, BodyKind::Cloud)
    }

    /// Exempt from collision regardless of overlap; clouds always are
    #[inline]
    pub fn non_colliding(&self) -> bool {
        matches!(self.kind, BodyKind::Cloud)
    }

    #[inline]
    pub fn is_runner(&self) -> bool {
        matches!(self.kind, BodyKind::Runner(_))
    }

    pub fn runner_state(&self) -> Option<&RunnerState> {
        match &self.kind {
            BodyKind::Runner(state) => Some(state),
            _ => None,
        }
    }

    /// Top-left corner of the box
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    /// Bottom-right corner of the box
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.size / 2.0
    }

    /// Fully past the left screen edge (the runner is never off-screen)
    pub fn is_off_screen(&self) -> bool {
        !self.is_runner() && self.center.x + self.size.x <= 0.0
    }

    /// Advance this body by one tick
    pub fn update(&mut self, ctx: &TickContext) {
        match &mut self.kind {
            BodyKind::Runner(state) => {
                update_runner(&mut self.center, state, ctx.input.is_down(keys::JUMP))
            }
            BodyKind::Obstacle => self.center.x -= ctx.scroll_speed,
            BodyKind::Cloud => self.center.x -= ctx.scroll_speed / 2.0,
        }
    }
}

/// Jump physics. Screen y grows downward, so rising subtracts velocity.
fn update_runner(center: &mut Vec2, state: &mut RunnerState, jump_held: bool) {
    // Holding jump mid-air does nothing until we land
    if jump_held && !state.is_jumping {
        state.is_jumping = true;
        state.vertical_velocity = JUMP_VELOCITY;
    }

    if state.is_jumping {
        center.y -= state.vertical_velocity;
        state.vertical_velocity -= GRAVITY;
        if center.y >= state.rest_y {
            center.y = state.rest_y;
            state.vertical_velocity = 0.0;
            state.is_jumping = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ctx(input: &InputState) -> TickContext<'_> {
        TickContext {
            scroll_speed: DEFAULT_SCROLL_SPEED,
            input,
        }
    }

    fn jump_held() -> InputState {
        let mut input = InputState::new();
        input.set_key(keys::JUMP, true);
        input
    }

    #[test]
    fn test_cloud_is_non_colliding() {
        let cloud = Body::cloud(1, Vec2::new(100.0, 50.0), Vec2::new(40.0, 20.0));
        assert!(cloud.non_colliding());
        let obstacle = Body::obstacle(2, Vec2::new(100.0, 50.0), Vec2::new(30.0, 30.0));
        assert!(!obstacle.non_colliding());
    }

    #[test]
    fn test_cloud_stays_non_colliding_while_moving() {
        let input = InputState::new();
        let mut cloud = Body::cloud(1, Vec2::new(800.0, 40.0), Vec2::new(60.0, 20.0));
        for _ in 0..500 {
            cloud.update(&ctx(&input));
            assert!(cloud.non_colliding());
        }
        assert!(cloud.center.x < 400.0);
    }

    #[test]
    #[should_panic(expected = "invalid body geometry")]
    fn test_negative_size_rejected() {
        Body::obstacle(1, Vec2::ZERO, Vec2::new(-1.0, 10.0));
    }

    #[test]
    fn test_obstacle_and_cloud_scroll() {
        let input = InputState::new();
        let mut obstacle = Body::obstacle(1, Vec2::new(800.0, 305.0), Vec2::splat(30.0));
        let mut cloud = Body::cloud(2, Vec2::new(800.0, 90.0), Vec2::new(60.0, 20.0));

        obstacle.update(&ctx(&input));
        cloud.update(&ctx(&input));

        assert_eq!(obstacle.center, Vec2::new(796.0, 305.0));
        assert_eq!(cloud.center, Vec2::new(798.0, 90.0));
    }

    #[test]
    fn test_jump_key_ignored_by_scrollers() {
        let input = jump_held();
        let mut obstacle = Body::obstacle(1, Vec2::new(500.0, 305.0), Vec2::splat(30.0));
        obstacle.update(&ctx(&input));
        assert_eq!(obstacle.center.y, 305.0);
    }

    #[test]
    fn test_runner_stays_put_without_input() {
        let input = InputState::new();
        let mut runner = Body::runner(1, Vec2::new(160.0, 303.0), Vec2::new(20.0, 30.0));
        for _ in 0..100 {
            runner.update(&ctx(&input));
        }
        assert_eq!(runner.center, Vec2::new(160.0, 303.0));
        assert!(!runner.runner_state().unwrap().is_jumping);
    }

    #[test]
    fn test_runner_jump_arc() {
        let input = jump_held();
        let mut runner = Body::runner(1, Vec2::new(160.0, 303.0), Vec2::new(20.0, 30.0));

        runner.update(&ctx(&input));
        let state = *runner.runner_state().unwrap();
        assert!(state.is_jumping);
        assert_eq!(runner.center.y, 303.0 - JUMP_VELOCITY);

        // Release the key and let it fall back
        let released = InputState::new();
        let mut ticks = 1;
        while runner.runner_state().unwrap().is_jumping {
            runner.update(&ctx(&released));
            assert!(runner.center.y <= 303.0, "runner sank below the ground");
            ticks += 1;
            assert!(ticks < 100, "runner never landed");
        }

        assert_eq!(runner.center.y, 303.0);
        assert_eq!(runner.runner_state().unwrap().vertical_velocity, 0.0);
        assert_eq!(ticks, 31);
    }

    #[test]
    fn test_held_jump_does_not_retrigger_midair() {
        let input = jump_held();
        let mut runner = Body::runner(1, Vec2::new(160.0, 303.0), Vec2::new(20.0, 30.0));

        runner.update(&ctx(&input));
        runner.update(&ctx(&input));
        // Second tick keeps decelerating instead of relaunching
        assert_eq!(runner.center.y, 303.0 - 15.0 - 14.0);
        assert_eq!(runner.runner_state().unwrap().vertical_velocity, 13.0);
    }

    proptest! {
        #[test]
        fn prop_scrollers_move_horizontally_only(
            x in -1000.0f32..1000.0,
            y in 0.0f32..400.0,
            speed in 0.5f32..20.0,
        ) {
            let input = InputState::new();
            let ctx = TickContext { scroll_speed: speed, input: &input };

            let mut obstacle = Body::obstacle(1, Vec2::new(x, y), Vec2::splat(30.0));
            obstacle.update(&ctx);
            prop_assert_eq!(obstacle.center.y, y);
            prop_assert_eq!(obstacle.center.x, x - speed);

            let mut cloud = Body::cloud(2, Vec2::new(x, y), Vec2::new(50.0, 20.0));
            cloud.update(&ctx);
            prop_assert_eq!(cloud.center.y, y);
            prop_assert_eq!(cloud.center.x, x - speed / 2.0);
        }
    }
}
