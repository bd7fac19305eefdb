//! # Input Module
//!
//! Keyboard polling for viewpoint movement and quit handling.
//!
//! Two movement policies exist, mirroring the two historical front-ends of
//! this viewer: *continuous* samples held keys every frame and scales the
//! motion by measured frame time, *discrete* applies a fixed delta once per
//! key press.

use crate::config;
use crate::scene::Position;
use crate::state::MovementFlags;
use macroquad::prelude::*;

/// Input events the main loop acts on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerInput {
    /// Apply a one-shot viewpoint delta.
    Step(Position),
    /// Leave the main loop.
    Quit,
}

/// Movement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Held keys move the viewpoint a velocity-scaled amount every frame.
    Continuous,
    /// Each key press moves the viewpoint one fixed step.
    Discrete,
}

/// The one-shot delta for a movement key press, if any.
///
/// Arrow keys and WASD both map to the four cardinal steps.
pub fn step_for_key(key: KeyCode) -> Option<Position> {
    let step = config::STEP_SIZE;
    match key {
        KeyCode::Left | KeyCode::A => Some(Position::new(-step, 0.0)),
        KeyCode::Right | KeyCode::D => Some(Position::new(step, 0.0)),
        KeyCode::Up | KeyCode::W => Some(Position::new(0.0, -step)),
        KeyCode::Down | KeyCode::S => Some(Position::new(0.0, step)),
        _ => None,
    }
}

const MOVEMENT_KEYS: [KeyCode; 8] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::A,
    KeyCode::D,
    KeyCode::W,
    KeyCode::S,
];

/// Polls the keyboard according to the selected movement policy.
pub struct InputHandler {
    mode: InputMode,
}

impl InputHandler {
    /// Creates an input handler for the given movement policy.
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    /// The active movement policy.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Checks for pending one-shot input.
    ///
    /// Quit (Escape) is reported in both policies; movement steps only under
    /// [`InputMode::Discrete`].
    pub fn poll(&self) -> Option<PlayerInput> {
        if is_key_pressed(KeyCode::Escape) {
            return Some(PlayerInput::Quit);
        }

        if self.mode == InputMode::Discrete {
            for key in MOVEMENT_KEYS {
                if is_key_pressed(key) {
                    if let Some(delta) = step_for_key(key) {
                        return Some(PlayerInput::Step(delta));
                    }
                }
            }
        }

        None
    }

    /// Samples which movement keys are currently held.
    ///
    /// Only meaningful under [`InputMode::Continuous`]; under the discrete
    /// policy the result is all-false.
    pub fn held_movement(&self) -> MovementFlags {
        if self.mode != InputMode::Continuous {
            return MovementFlags::default();
        }

        MovementFlags {
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        }
    }
}
