//! Shared geometric value types.
//!
//! Coordinates are screen coordinates: x grows right, y grows down.

use std::sync::Arc;

use glam::{DVec2, dvec2};

/// Shape template vertices on the unit square `[-1, 1] x [-1, 1]`.
///
/// Templates are built once and shared read-only by every node using the shape.
pub type Points = Arc<[DVec2]>;

/// The runtime placement of one node: its center and full extents.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct NodeBounds {
    pub center: DVec2,
    pub width: f64,
    pub height: f64,
}

impl NodeBounds {
    pub fn new(center: DVec2, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Bounds centered at `(x, y)`
    pub fn from_center(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(dvec2(x, y), width, height)
    }

    #[inline]
    pub fn half_size(&self) -> DVec2 {
        dvec2(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> DVec2 {
        self.center - self.half_size()
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> DVec2 {
        self.center + self.half_size()
    }

    /// The same node grown by `padding` on every side.
    #[inline]
    pub fn padded(&self, padding: f64) -> Self {
        Self::new(
            self.center,
            self.width + 2.0 * padding,
            self.height + 2.0 * padding,
        )
    }

    /// Same center, different extents
    #[inline]
    pub fn with_size(&self, width: f64, height: f64) -> Self {
        Self::new(self.center, width, height)
    }

    /// Map a unit-square template point into these bounds.
    #[inline]
    pub fn place(&self, unit: DVec2) -> DVec2 {
        self.center + unit * self.half_size()
    }
}

/// Convert a flat `[x0, y0, x1, y1, ...]` list into points.
///
/// A trailing unpaired coordinate is ignored.
pub fn pairs_to_points(flat: &[f64]) -> Vec<DVec2> {
    flat.chunks_exact(2).map(|c| dvec2(c[0], c[1])).collect()
}
