//! Logical grid cells and the points of a generated model.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a cell in logical grid coordinates (unscaled indices).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// The column index, counted along the first spatial axis.
    pub column: usize,
    /// The global row index, counted across every stacked sub-grid.
    pub row: usize,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// One entry of a model: the position of a single addressable point.
///
/// The grids are planar, so the middle coordinate is always `0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ModelPoint {
    /// Position `[x, y, z]` in normalized model space.
    pub point: [f64; 3],
}

impl ModelPoint {
    /// Creates a new `ModelPoint`.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { point: [x, y, z] }
    }

    /// The first spatial coordinate.
    pub const fn x(&self) -> f64 {
        self.point[0]
    }

    /// The middle spatial coordinate.
    pub const fn y(&self) -> f64 {
        self.point[1]
    }

    /// The third spatial coordinate.
    pub const fn z(&self) -> f64 {
        self.point[2]
    }
}

impl fmt::Display for ModelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}, {:.4}]", self.x(), self.y(), self.z())
    }
}

/// Axis-aligned extent of a set of model points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest value seen on each axis.
    pub min: [f64; 3],
    /// Largest value seen on each axis.
    pub max: [f64; 3],
}

impl Bounds {
    /// Grows the bounds to include `p`.
    pub fn include(&mut self, p: &ModelPoint) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(p.point[axis]);
            self.max[axis] = self.max[axis].max(p.point[axis]);
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {:.4}..{:.4}, y: {:.4}..{:.4}, z: {:.4}..{:.4})",
            self.min[0], self.max[0], self.min[1], self.max[1], self.min[2], self.max[2]
        )
    }
}
