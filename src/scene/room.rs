//! # Room Compositing
//!
//! A room is an ordered stack of layers rendered together with a parallax
//! effect anchored to one designated center layer.

use crate::rendering::Surface;
use crate::scene::{Layer, Position};
use crate::{ParallaxError, ParallaxResult};
use std::rc::Rc;

/// An ordered stack of shared layers.
///
/// List order is paint order: the first layer added is drawn first (back),
/// the last on top.
pub struct Room<S: Surface> {
    layers: Vec<Rc<Layer<S>>>,
}

impl<S: Surface> Default for Room<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Room<S> {
    /// Creates an empty room.
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Appends a layer to the stack.
    pub fn add_layer(&mut self, layer: Rc<Layer<S>>) {
        self.layers.push(layer);
    }

    /// Number of layers in the stack.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Renders every layer into `target` with parallax anchored to `center`.
    ///
    /// `viewpoint` is a logical position within the center layer. Its
    /// normalized fractions of the center layer's extent are *not* clamped:
    /// an out-of-bounds viewpoint simply produces an out-of-bounds scroll.
    ///
    /// Each layer is translated so that the point at the same fraction of
    /// its own extent lands on the middle of the target; layers smaller than
    /// the center layer therefore scroll slower, larger ones faster.
    ///
    /// Fails with [`ParallaxError::CenterLayerMissing`], before anything is
    /// drawn, when `center` is not a member of this room.
    pub fn render(
        &self,
        target: &mut S,
        center: &Rc<Layer<S>>,
        viewpoint: Position,
    ) -> ParallaxResult<()> {
        let center = self
            .layers
            .iter()
            .find(|layer| Rc::ptr_eq(layer, center))
            .ok_or(ParallaxError::CenterLayerMissing)?;

        let xpercent = viewpoint.x / center.width();
        let ypercent = viewpoint.y / center.height();

        let half_width = target.width() / 2.0;
        let half_height = target.height() / 2.0;

        for layer in &self.layers {
            let offset = Position::new(
                -layer.width() * xpercent + half_width,
                -layer.height() * ypercent + half_height,
            );
            layer.render(target, offset);
        }

        target.present();
        Ok(())
    }
}
