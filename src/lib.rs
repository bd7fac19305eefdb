//! # Parallax Room Viewer
//!
//! A small 2D scene viewer: a stack of image layers composited onto the
//! screen with per-layer parallax scrolling around a movable viewpoint.
//!
//! ## Architecture Overview
//!
//! The crate is organized around a handful of small pieces:
//!
//! - **Scene Model**: `Position`, `Object`, `Layer`, and `Room`, the layer
//!   stack and the parallax compositing algorithm
//! - **Rendering**: the `Surface` pixel-buffer boundary, backed by macroquad
//!   for the window and by a draw-op journal for headless tests
//! - **Input**: keyboard polling with continuous (held-key) and discrete
//!   (key-press) movement policies
//! - **State**: the viewpoint, movement flags, and frame timing
//! - **Viewer**: the poll → update → render main loop
//!
//! The parallax rule is the heart of it: every layer's visible center scales
//! with its own extent relative to a designated center layer, so layers of
//! different extents scroll at different rates with no per-layer special
//! cases.

pub mod input;
pub mod rendering;
pub mod scene;
pub mod state;
pub mod viewer;

pub use input::{InputHandler, InputMode, PlayerInput};
pub use rendering::{DrawJournal, DrawOp, PixelSurface, RecordingSurface, Surface};
pub use scene::{CompositingMode, Layer, Object, Position, Room};
pub use state::{FrameTimer, MovementFlags, ViewerState};
pub use viewer::Viewer;

/// Core error type for the viewer.
#[derive(thiserror::Error, Debug)]
pub enum ParallaxError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Display subsystem failure, carrying the platform diagnostic
    #[error("display error: {0}")]
    Display(String),

    /// An image asset could not be loaded
    #[error("asset load failed: {0}")]
    Asset(String),

    /// The requested center layer is not a member of the room
    #[error("requested center layer doesn't exist in room")]
    CenterLayerMissing,
}

/// Result type used throughout the parallax codebase.
pub type ParallaxResult<T> = Result<T, ParallaxError>;

/// Version information for the viewer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compiled-in scene and timing constants.
pub mod config {
    /// Window width in pixels
    pub const SCREEN_WIDTH: i32 = 640;

    /// Window height in pixels
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Viewpoint scroll speed for held keys, in layer units per second
    pub const SCROLL_SPEED: f32 = 50.0;

    /// Viewpoint delta applied per key press in discrete input mode
    pub const STEP_SIZE: f32 = 10.0;

    /// Length of the frame-rate measurement window, in seconds
    pub const FPS_WINDOW_SECS: f64 = 0.1;

    /// Seconds-per-frame estimate used until the first timing window closes
    pub const INITIAL_SECONDS_PER_FRAME: f32 = 0.03;

    /// Starting viewpoint within the center layer
    pub const INITIAL_VIEWPOINT: (f32, f32) = (100.0, 100.0);
}
