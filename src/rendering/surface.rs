//! # Surface Abstraction
//!
//! Opaque pixel buffers with clear/blit/present operations, and the
//! macroquad-backed implementation used by the viewer binary.

use crate::scene::Position;
use crate::{ParallaxError, ParallaxResult};
use macroquad::prelude::*;

/// An opaque pixel buffer.
///
/// This is the full capability set the scene model needs from a display
/// library: dimensions, a transparent clear, an alpha blit into another
/// surface of the same family at an integer-rounded offset (no scaling, no
/// clipping beyond the underlying primitive), and a present/flip.
pub trait Surface {
    /// Width of the buffer in pixels.
    fn width(&self) -> f32;

    /// Height of the buffer in pixels.
    fn height(&self) -> f32;

    /// Fills the buffer with transparent black.
    fn clear(&mut self);

    /// Alpha-blits this buffer into `target` at `position`.
    ///
    /// The offset is rounded to whole pixels before drawing.
    fn blit(&self, target: &mut Self, position: Position);

    /// Flips the buffer to the display.
    fn present(&mut self);
}

/// Macroquad-backed pixel surface.
///
/// One enum covers the three kinds of buffer the viewer composites between:
/// the window backbuffer, immutable loaded textures (object and background
/// art), and offscreen render targets (layer composite caches).
pub enum PixelSurface {
    /// The window backbuffer.
    Screen,
    /// An immutable loaded image. Valid only as a blit source.
    Texture(Texture2D),
    /// An offscreen composite buffer.
    Offscreen(RenderTarget),
}

impl PixelSurface {
    /// The window backbuffer surface.
    pub fn screen() -> Self {
        PixelSurface::Screen
    }

    /// Allocates an offscreen buffer of the given pixel size.
    pub fn offscreen(width: u32, height: u32) -> Self {
        PixelSurface::Offscreen(render_target(width, height))
    }

    /// Loads an image asset into a texture surface.
    ///
    /// A missing or corrupt file is a fatal initialization error carrying
    /// the platform's diagnostic string.
    pub async fn load(path: &str) -> ParallaxResult<Self> {
        let texture = load_texture(path)
            .await
            .map_err(|e| ParallaxError::Asset(format!("{}: {:?}", path, e)))?;
        Ok(PixelSurface::Texture(texture))
    }

    /// The underlying texture, when this surface can act as a blit source.
    fn source_texture(&self) -> Option<&Texture2D> {
        match self {
            PixelSurface::Screen => None,
            PixelSurface::Texture(texture) => Some(texture),
            PixelSurface::Offscreen(target) => Some(&target.texture),
        }
    }
}

/// Camera that maps drawing coordinates 1:1 onto an offscreen target.
fn offscreen_camera(target: &RenderTarget) -> Camera2D {
    let width = target.texture.width();
    let height = target.texture.height();
    let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, width, height));
    camera.render_target = Some(target.clone());
    camera
}

impl Surface for PixelSurface {
    fn width(&self) -> f32 {
        match self {
            PixelSurface::Screen => screen_width(),
            PixelSurface::Texture(texture) => texture.width(),
            PixelSurface::Offscreen(target) => target.texture.width(),
        }
    }

    fn height(&self) -> f32 {
        match self {
            PixelSurface::Screen => screen_height(),
            PixelSurface::Texture(texture) => texture.height(),
            PixelSurface::Offscreen(target) => target.texture.height(),
        }
    }

    fn clear(&mut self) {
        match self {
            PixelSurface::Screen => {
                set_default_camera();
                clear_background(BLACK);
            }
            PixelSurface::Offscreen(target) => {
                set_camera(&offscreen_camera(target));
                clear_background(BLANK);
                set_default_camera();
            }
            // Loaded textures are immutable sources.
            PixelSurface::Texture(_) => {}
        }
    }

    fn blit(&self, target: &mut Self, position: Position) {
        let Some(texture) = self.source_texture() else {
            return;
        };
        let x = position.x.round();
        let y = position.y.round();

        // Render-target textures come out upside down relative to screen
        // convention and must be flipped when drawn.
        let params = DrawTextureParams {
            flip_y: matches!(self, PixelSurface::Offscreen(_)),
            ..Default::default()
        };

        match target {
            PixelSurface::Screen => {
                set_default_camera();
                draw_texture_ex(texture, x, y, WHITE, params);
            }
            PixelSurface::Offscreen(buffer) => {
                set_camera(&offscreen_camera(buffer));
                draw_texture_ex(texture, x, y, WHITE, params);
                set_default_camera();
            }
            PixelSurface::Texture(_) => {
                log::warn!("blit into an immutable texture ignored");
            }
        }
    }

    fn present(&mut self) {
        // macroquad flips the backbuffer in next_frame(), which the main
        // loop awaits once per iteration; offscreen targets have nothing to
        // flip.
    }
}
