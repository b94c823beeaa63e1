#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for laying out zig-zag wired LED grids."]
#![doc = ""]
#![doc = "This crate computes the ordered point model of a planar grid (or a stack of"]
#![doc = "planar grids) whose columns are wired as a snake, so that the n-th model point"]
#![doc = "is the position of the n-th pixel on the strip."]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod point_types;
pub mod presets;

pub use error::LayoutError;
pub use grid::{GridLayout, Model, zigzag_row};
pub use point_types::{Bounds, GridPoint, ModelPoint};
pub use presets::Preset;
