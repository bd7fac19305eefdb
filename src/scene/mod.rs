//! # Scene Module
//!
//! The layer-stack scene model: positions, decorative objects, compositable
//! layers, and the room that renders them with parallax.

pub mod layer;
pub mod object;
pub mod room;

pub use layer::{CompositingMode, Layer};
pub use object::Object;
pub use room::Room;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A 2D coordinate in layer units.
///
/// Coordinates are `f32` throughout; the discrete input policy simply applies
/// whole-unit deltas. Positions order scanline-style (y-major, x-minor),
/// which exists only to give layer placements a deterministic paint order.
///
/// # Examples
///
/// ```
/// use parallax::Position;
///
/// let pos = Position::new(10.0, 5.0);
/// assert_eq!(pos + Position::new(-3.0, 1.0), Position::new(7.0, 6.0));
/// assert!(Position::new(50.0, 1.0) < Position::new(0.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Scanline ordering: by y first, then x.
    ///
    /// Implemented with [`f32::total_cmp`], so it is a strict total order
    /// even in the presence of non-finite coordinates.
    pub fn scanline_cmp(&self, other: &Position) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.scanline_cmp(other))
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5.0, 10.0);
        assert_eq!(pos.x, 5.0);
        assert_eq!(pos.y, 10.0);
        assert_eq!(Position::origin(), Position::new(0.0, 0.0));
    }

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5.0, 10.0);
        let pos2 = Position::new(3.0, 2.0);
        assert_eq!(pos1 + pos2, Position::new(8.0, 12.0));
        assert_eq!(pos1 - pos2, Position::new(2.0, 8.0));
    }

    #[test]
    fn test_scanline_order_is_y_major() {
        // Any y difference dominates x.
        assert!(Position::new(100.0, 1.0) < Position::new(-100.0, 2.0));
        // Ties on y fall back to x.
        assert!(Position::new(1.0, 5.0) < Position::new(2.0, 5.0));
    }

    #[test]
    fn test_scanline_order_is_irreflexive() {
        let pos = Position::new(3.0, 4.0);
        assert_eq!(pos.scanline_cmp(&pos), Ordering::Equal);
        assert!(!(pos < pos));
    }
}
