//! # Viewer Loop
//!
//! The poll → update → render driver that runs a room until quit.

use crate::config;
use crate::input::{InputHandler, InputMode, PlayerInput};
use crate::rendering::{PixelSurface, Surface};
use crate::scene::{Layer, Room};
use crate::state::{FrameTimer, ViewerState};
use crate::ParallaxResult;
use log::{debug, info};
use macroquad::prelude::{get_time, next_frame};
use std::rc::Rc;

/// Owns the room, the screen surface, and the per-frame state, and runs the
/// main loop.
pub struct Viewer {
    room: Room<PixelSurface>,
    center: Rc<Layer<PixelSurface>>,
    screen: PixelSurface,
    state: ViewerState,
    input: InputHandler,
    timer: FrameTimer,
}

impl Viewer {
    /// Creates a viewer over `room`, with parallax anchored to `center`.
    pub fn new(room: Room<PixelSurface>, center: Rc<Layer<PixelSurface>>, mode: InputMode) -> Self {
        Self {
            room,
            center,
            screen: PixelSurface::screen(),
            state: ViewerState::new(),
            input: InputHandler::new(mode),
            timer: FrameTimer::new(config::FPS_WINDOW_SECS, get_time()),
        }
    }

    /// Runs until the player quits.
    ///
    /// Each iteration polls at most one pending one-shot input, folds held
    /// keys into the movement flags, advances the viewpoint, re-renders the
    /// room, and waits for the next frame. Quit arrives as an ordinary
    /// [`PlayerInput`] value, not an error.
    pub async fn run(&mut self) -> ParallaxResult<()> {
        info!(
            "viewer started ({:?} input, viewpoint {:?})",
            self.input.mode(),
            self.state.viewpoint
        );

        loop {
            match self.input.poll() {
                Some(PlayerInput::Quit) => {
                    info!("quit requested");
                    break;
                }
                Some(PlayerInput::Step(delta)) => {
                    self.state.apply_step(delta);
                    debug!("viewpoint stepped to {:?}", self.state.viewpoint);
                }
                None => {}
            }

            // Held-key movement; all-false under the discrete policy, so
            // this is a no-op there.
            self.state.movement = self.input.held_movement();
            self.state.advance_frame();

            self.screen.clear();
            self.room
                .render(&mut self.screen, &self.center, self.state.viewpoint)?;

            if let Some(seconds_per_frame) = self.timer.frame(get_time()) {
                self.state.seconds_per_frame = seconds_per_frame;
                info!("FPS: {:.0}", 1.0 / seconds_per_frame);
            }

            next_frame().await;
        }

        Ok(())
    }
}
