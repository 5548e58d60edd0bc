//! Keyboard state sampled once per tick
//!
//! Host key events write into `InputState` whenever they arrive; the tick
//! reads a snapshot. Each key code is tracked independently and the last
//! write wins.
//!
//! Besides held keys, `was_pressed` reports key-down edges since the last
//! `end_frame`. The engine clears edges after every tick; the simulation
//! itself only reads held keys (the jump trigger), so edges are there for
//! hosts that want one-shot actions.

use std::collections::HashSet;

/// Key codes recognized by the game (DOM `keyCode` values)
pub mod keys {
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
    pub const S: u32 = 83;
    pub const SPACE: u32 = 32;

    /// Key that makes the runner jump
    pub const JUMP: u32 = SPACE;
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Keys currently held
    down: HashSet<u32>,
    /// Keys that went from released to pressed since the last `end_frame`
    pressed: HashSet<u32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down (`true`) or key-up (`false`) event
    pub fn set_key(&mut self, code: u32, pressed: bool) {
        if pressed {
            if self.down.insert(code) {
                self.pressed.insert(code);
            }
        } else {
            self.down.remove(&code);
        }
    }

    /// Whether `code` is currently held. Unknown codes are never down.
    pub fn is_down(&self, code: u32) -> bool {
        self.down.contains(&code)
    }

    /// Whether `code` was pressed since the last frame ended
    pub fn was_pressed(&self, code: u32) -> bool {
        self.pressed.contains(&code)
    }

    /// Drop edge-triggered presses; held keys stay held
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
