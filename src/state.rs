//! # Viewer State
//!
//! The mutable viewpoint/input state updated once per frame or per key
//! event, plus the frame-rate measurement window.

use crate::config;
use crate::scene::Position;

/// Which movement keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementFlags {
    /// Net movement direction, one unit per held axis.
    pub fn direction(self) -> Position {
        let mut direction = Position::origin();
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        if self.up {
            direction.y -= 1.0;
        }
        if self.down {
            direction.y += 1.0;
        }
        direction
    }
}

/// The viewpoint plus transient input flags and frame timing.
#[derive(Debug, Clone, Copy)]
pub struct ViewerState {
    /// Logical position within the center layer.
    pub viewpoint: Position,
    /// Held-key flags, refreshed every frame under the continuous input policy.
    pub movement: MovementFlags,
    /// Current seconds-per-frame estimate, used to scale held-key movement.
    pub seconds_per_frame: f32,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerState {
    /// Creates the starting state: viewpoint (100, 100), no keys held, and
    /// the initial frame-time estimate.
    pub fn new() -> Self {
        let (x, y) = config::INITIAL_VIEWPOINT;
        Self {
            viewpoint: Position::new(x, y),
            movement: MovementFlags::default(),
            seconds_per_frame: config::INITIAL_SECONDS_PER_FRAME,
        }
    }

    /// Applies one frame of held-key movement, scaled by the current
    /// seconds-per-frame estimate.
    pub fn advance_frame(&mut self) {
        let step = config::SCROLL_SPEED * self.seconds_per_frame;
        let direction = self.movement.direction();
        self.viewpoint = self.viewpoint + Position::new(direction.x * step, direction.y * step);
    }

    /// Applies a one-shot viewpoint delta (discrete input policy).
    pub fn apply_step(&mut self, delta: Position) {
        self.viewpoint = self.viewpoint + delta;
    }
}

/// Frame-rate measurement over fixed time windows.
///
/// The loop reports each frame with a timestamp; when a window closes the
/// timer returns a fresh seconds-per-frame estimate. A window that somehow
/// contains no frames yields no estimate rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use parallax::FrameTimer;
///
/// let mut timer = FrameTimer::new(0.1, 0.0);
/// assert_eq!(timer.frame(0.05), None); // window still open
/// let estimate = timer.frame(0.1).unwrap(); // 2 frames over 0.1s
/// assert!((estimate - 0.05).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    window_secs: f64,
    window_start: f64,
    frames: u32,
}

impl FrameTimer {
    /// Creates a timer with the given window length, starting at `now`.
    pub fn new(window_secs: f64, now: f64) -> Self {
        Self {
            window_secs,
            window_start: now,
            frames: 0,
        }
    }

    /// Records one rendered frame at timestamp `now` (seconds).
    ///
    /// Returns the new seconds-per-frame estimate when a measurement window
    /// closes, `None` otherwise.
    pub fn frame(&mut self, now: f64) -> Option<f32> {
        self.frames += 1;
        let elapsed = now - self.window_start;
        if elapsed < self.window_secs {
            return None;
        }

        let estimate = if self.frames > 0 && elapsed > 0.0 {
            Some((elapsed / f64::from(self.frames)) as f32)
        } else {
            None
        };

        self.window_start = now;
        self.frames = 0;
        estimate
    }
}
