//! # Draw-Op Recording
//!
//! A [`Surface`] implementation that journals every operation instead of
//! touching a GPU. The crate's tests render whole rooms against recording
//! surfaces and assert on the exact draw sequence.

use crate::rendering::Surface;
use crate::scene::Position;
use std::cell::RefCell;
use std::rc::Rc;

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// `target` was filled with transparent black.
    Clear { target: String },
    /// `source` was blitted into `target` at `position` (already rounded).
    Blit {
        source: String,
        target: String,
        position: Position,
    },
    /// `target` was flipped to the display.
    Present { target: String },
}

/// Shared, ordered journal of [`DrawOp`]s.
///
/// Every [`RecordingSurface`] in a scene holds a handle to the same journal,
/// so the journal sees the complete draw sequence in submission order.
#[derive(Debug, Default)]
pub struct DrawJournal {
    ops: RefCell<Vec<DrawOp>>,
}

impl DrawJournal {
    /// Creates a fresh shared journal.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Appends an operation.
    pub fn record(&self, op: DrawOp) {
        self.ops.borrow_mut().push(op);
    }

    /// Snapshot of all recorded operations, in order.
    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.ops.borrow().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.borrow().is_empty()
    }

    /// Drains the journal, returning everything recorded so far.
    pub fn take(&self) -> Vec<DrawOp> {
        self.ops.borrow_mut().split_off(0)
    }

    /// Recorded blits into the named target, in order.
    pub fn blits_into(&self, target: &str) -> Vec<DrawOp> {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, DrawOp::Blit { target: t, .. } if t == target))
            .cloned()
            .collect()
    }
}

/// A named, fixed-size surface that records instead of drawing.
///
/// # Examples
///
/// ```
/// use parallax::{DrawJournal, DrawOp, Position, RecordingSurface, Surface};
///
/// let journal = DrawJournal::new();
/// let sprite = RecordingSurface::new(&journal, "sprite", 16.0, 16.0);
/// let mut screen = RecordingSurface::new(&journal, "screen", 640.0, 480.0);
///
/// sprite.blit(&mut screen, Position::new(10.4, 20.6));
/// assert_eq!(
///     journal.ops(),
///     vec![DrawOp::Blit {
///         source: "sprite".into(),
///         target: "screen".into(),
///         position: Position::new(10.0, 21.0),
///     }]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    name: String,
    width: f32,
    height: f32,
    journal: Rc<DrawJournal>,
}

impl RecordingSurface {
    /// Creates a surface that records into `journal`.
    pub fn new(journal: &Rc<DrawJournal>, name: &str, width: f32, height: f32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            journal: Rc::clone(journal),
        }
    }

    /// The surface's journal name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.journal.record(DrawOp::Clear {
            target: self.name.clone(),
        });
    }

    fn blit(&self, target: &mut Self, position: Position) {
        // Round exactly like the pixel backend, so recorded sequences match
        // what would hit the screen.
        self.journal.record(DrawOp::Blit {
            source: self.name.clone(),
            target: target.name.clone(),
            position: Position::new(position.x.round(), position.y.round()),
        });
    }

    fn present(&mut self) {
        self.journal.record(DrawOp::Present {
            target: self.name.clone(),
        });
    }
}
