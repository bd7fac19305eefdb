//! # Rendering Module
//!
//! The pixel-buffer boundary between the scene model and the display.
//!
//! Everything above this module works against the [`Surface`] trait; the
//! macroquad-backed [`PixelSurface`] puts pixels on screen, while
//! [`RecordingSurface`] journals draw operations so tests can run headless.

pub mod recording;
pub mod surface;

pub use recording::{DrawJournal, DrawOp, RecordingSurface};
pub use surface::{PixelSurface, Surface};
