#![warn(missing_docs)]

//! Zig-zag grid layouts and the models generated from them.
//!
//! Points are emitted sub-grid first, then column by column. Within a column the
//! scan direction alternates: even columns run with increasing row index, odd
//! columns run back down, which is how a single strip snakes through the panel.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::point_types::{Bounds, GridPoint, ModelPoint};

/// Maps a row visited by the strip to the row it actually lights.
///
/// `row_base` and `rows` describe the sub-grid's range of global rows. Odd columns
/// are reversed within that range, even columns are returned unchanged.
///
/// # Arguments
/// * `column` - Column being scanned
/// * `row` - Global row index in scan order, within `row_base..row_base + rows`
/// * `row_base` - First global row of the sub-grid
/// * `rows` - Number of rows in the sub-grid
pub const fn zigzag_row(column: usize, row: usize, row_base: usize, rows: usize) -> usize {
    if column & 1 == 1 {
        row_base + rows - 1 - (row - row_base)
    } else {
        row
    }
}

/// Parameters of a grid, or a vertical stack of identical grids, wired as a snake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Number of columns
    width: usize,
    /// Number of rows in each sub-grid
    sub_grid_height: usize,
    /// Number of sub-grids stacked along the row axis
    sub_grids: usize,
    /// Model units per cell. Negative values flip the geometry.
    scale: f64,
}

impl GridLayout {
    /// Creates a new layout.
    ///
    /// # Arguments
    /// * `width` - Number of columns
    /// * `sub_grid_height` - Rows in each stacked sub-grid
    /// * `sub_grids` - Number of sub-grids; `1` for a single flat grid
    /// * `scale` - Model units per cell
    ///
    /// # Returns
    /// * `Result<Self, LayoutError>` - The layout or an error if parameters are invalid
    pub fn new(
        width: usize,
        sub_grid_height: usize,
        sub_grids: usize,
        scale: f64,
    ) -> Result<Self, LayoutError> {
        if width == 0 || sub_grid_height == 0 {
            return Err(LayoutError::InvalidDimensions("Width and height must be non-zero"));
        }
        if sub_grids == 0 {
            return Err(LayoutError::InvalidSubGridCount("At least one sub-grid is required"));
        }
        if !scale.is_finite() || scale == 0.0 {
            return Err(LayoutError::InvalidScale("Scale must be finite and non-zero"));
        }
        if width
            .checked_mul(sub_grid_height)
            .and_then(|n| n.checked_mul(sub_grids))
            .is_none()
        {
            return Err(LayoutError::InvalidDimensions("Grid dimensions too large, would cause overflow"));
        }

        Ok(GridLayout {
            width,
            sub_grid_height,
            sub_grids,
            scale,
        })
    }

    /// Builds a layout from parameters already known to pass [`GridLayout::new`].
    pub(crate) const fn from_parts(
        width: usize,
        sub_grid_height: usize,
        sub_grids: usize,
        scale: f64,
    ) -> Self {
        GridLayout {
            width,
            sub_grid_height,
            sub_grids,
            scale,
        }
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows in a single sub-grid.
    pub const fn sub_grid_height(&self) -> usize {
        self.sub_grid_height
    }

    /// Number of stacked sub-grids.
    pub const fn sub_grids(&self) -> usize {
        self.sub_grids
    }

    /// Model units per cell.
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Total number of rows across the whole stack.
    pub const fn height(&self) -> usize {
        self.sub_grid_height * self.sub_grids
    }

    /// Number of points in the generated model.
    pub const fn len(&self) -> usize {
        self.width * self.height()
    }

    /// Always false; a valid layout has at least one point.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Logical center `(column, row)` of the whole stack. Spatial coordinates are
    /// measured from here, so the model is centered on the origin.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.width - 1) as f64 / 2.0,
            (self.height() - 1) as f64 / 2.0,
        )
    }

    /// Returns the cell lit by the `index`-th point of the strip, or `None` if the
    /// index is past the end of the layout.
    pub fn address_of(&self, index: usize) -> Option<GridPoint> {
        if index >= self.len() {
            return None;
        }
        let per_sub_grid = self.width * self.sub_grid_height;
        let row_base = (index / per_sub_grid) * self.sub_grid_height;
        let within = index % per_sub_grid;
        let column = within / self.sub_grid_height;
        let row = row_base + within % self.sub_grid_height;

        Some(GridPoint::new(
            column,
            zigzag_row(column, row, row_base, self.sub_grid_height),
        ))
    }

    /// Converts a logical cell into its position in model space.
    pub fn point_at(&self, cell: GridPoint) -> ModelPoint {
        let (center_x, center_y) = self.center();
        // Adding 0.0 turns -0.0 into 0.0 for cells on a center line.
        let x = (cell.column as f64 - center_x) * self.scale + 0.0;
        let z = (cell.row as f64 - center_y) * self.scale + 0.0;
        ModelPoint::new(x, 0.0, z)
    }

    /// Iterates the lit cells in strip order.
    pub fn cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        let rows = self.sub_grid_height;
        (0..self.sub_grids).flat_map(move |sub_grid| {
            let row_base = sub_grid * rows;
            (0..self.width).flat_map(move |column| {
                (row_base..row_base + rows)
                    .map(move |row| GridPoint::new(column, zigzag_row(column, row, row_base, rows)))
            })
        })
    }

    /// Iterates the model points in strip order.
    pub fn points(&self) -> impl Iterator<Item = ModelPoint> + '_ {
        self.cells().map(move |cell| self.point_at(cell))
    }

    /// Generates the complete model.
    pub fn model(&self) -> Model {
        let mut points = Vec::with_capacity(self.len());
        points.extend(self.points());
        Model { points }
    }
}

/// An ordered sequence of model points. Order is the wiring order of the strip.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Model {
    points: Vec<ModelPoint>,
}

impl Model {
    /// Number of points in the model.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the model has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in strip order.
    pub fn points(&self) -> &[ModelPoint] {
        &self.points
    }

    /// Iterates the points in strip order.
    pub fn iter(&self) -> core::slice::Iter<'_, ModelPoint> {
        self.points.iter()
    }

    /// Extent of the model, or `None` if it is empty.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.points.first()?;
        let mut bounds = Bounds {
            min: first.point,
            max: first.point,
        };
        for p in &self.points[1..] {
            bounds.include(p);
        }
        Some(bounds)
    }
}

impl<'a> IntoIterator for &'a Model {
    type Item = &'a ModelPoint;
    type IntoIter = core::slice::Iter<'a, ModelPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
