//! # Layer Compositing
//!
//! A layer owns a fixed background image plus an ordered list of placed
//! objects, and renders them at a caller-supplied translation. Two
//! compositing policies exist: re-draw everything every call, or keep a
//! dirty-flagged composite cache and blit that.

use crate::rendering::Surface;
use crate::scene::{Object, Position};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

/// How a layer turns its contents into pixels on each render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositingMode {
    /// Background and every placement are drawn directly onto the target
    /// every call. Stateless; cost is O(placements) per frame.
    Immediate,
    /// Placements are composited into an internal buffer only when the
    /// placement list has changed; render blits the cached buffer.
    Cached,
}

/// One placed object: a position and a shared reference to the sprite.
struct Placement<S: Surface> {
    position: Position,
    object: Rc<Object<S>>,
}

/// Lazily recomputed composite of background + placements.
///
/// Owned behind a `RefCell` so `render(&self)` can refresh it; the cache is
/// invisible in the public contract.
struct CompositeCache<S: Surface> {
    buffer: S,
    dirty: bool,
}

/// A single compositable image plane: background plus placed objects.
///
/// Placements are kept in scanline order (y-major, x-minor). Two placements
/// at the same position both survive and render in insertion order.
pub struct Layer<S: Surface> {
    background: S,
    extent: Option<(f32, f32)>,
    placements: Vec<Placement<S>>,
    cache: Option<RefCell<CompositeCache<S>>>,
}

impl<S: Surface> Layer<S> {
    /// Creates a layer that re-draws its contents on every render call.
    pub fn immediate(background: S) -> Self {
        Self {
            background,
            extent: None,
            placements: Vec::new(),
            cache: None,
        }
    }

    /// Creates a layer that composites into `buffer` and blits the cache.
    ///
    /// The buffer should be at least the layer's extent; the caller
    /// allocates it from the same surface family as the background.
    pub fn cached(background: S, buffer: S) -> Self {
        Self {
            background,
            extent: None,
            placements: Vec::new(),
            cache: Some(RefCell::new(CompositeCache {
                buffer,
                dirty: true,
            })),
        }
    }

    /// Overrides the layer's logical extent, decoupling it from the
    /// background image's pixel size.
    pub fn with_extent(mut self, width: f32, height: f32) -> Self {
        self.extent = Some((width, height));
        self
    }

    /// The layer's compositing policy.
    pub fn mode(&self) -> CompositingMode {
        if self.cache.is_some() {
            CompositingMode::Cached
        } else {
            CompositingMode::Immediate
        }
    }

    /// Width of the layer's logical extent.
    pub fn width(&self) -> f32 {
        self.extent.map_or_else(|| self.background.width(), |(w, _)| w)
    }

    /// Height of the layer's logical extent.
    pub fn height(&self) -> f32 {
        self.extent.map_or_else(|| self.background.height(), |(_, h)| h)
    }

    /// Number of placed objects.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Places an object on the layer.
    ///
    /// Insertion keeps the placement list in scanline order; a placement at
    /// an already-occupied position goes after the existing ones, so nothing
    /// is silently dropped. Under the cached policy this marks the composite
    /// stale.
    pub fn add_object(&mut self, position: Position, object: Rc<Object<S>>) {
        let index = self
            .placements
            .partition_point(|p| p.position.scanline_cmp(&position) != Ordering::Greater);
        self.placements.insert(index, Placement { position, object });

        if let Some(cache) = &self.cache {
            cache.borrow_mut().dirty = true;
        }
    }

    /// Renders the layer into `target`, translated by `offset`.
    pub fn render(&self, target: &mut S, offset: Position) {
        match &self.cache {
            None => {
                self.background.blit(target, offset);
                for placement in &self.placements {
                    placement.object.render(target, placement.position + offset);
                }
            }
            Some(cache) => {
                let mut cache = cache.borrow_mut();
                if cache.dirty {
                    cache.buffer.clear();
                    self.background.blit(&mut cache.buffer, Position::origin());
                    for placement in &self.placements {
                        placement.object.render(&mut cache.buffer, placement.position);
                    }
                    cache.dirty = false;
                }
                cache.buffer.blit(target, offset);
            }
        }
    }
}
