#![warn(missing_docs)]

//! Error types for the layout library.
//!
//! This module defines the errors that can occur while describing a grid
//! layout, before any points are generated.

use core::fmt;

/// Errors that can occur when constructing a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when the width or sub-grid height is zero, or when
    /// the total number of points would overflow.
    InvalidDimensions(&'static str),
    /// Error for an invalid number of stacked sub-grids.
    /// This variant is returned when the sub-grid count is zero.
    InvalidSubGridCount(&'static str),
    /// Error for an invalid scale factor.
    /// This variant is returned when the scale is zero, NaN or infinite.
    InvalidScale(&'static str),
    /// Error for a preset name that does not match any known layout.
    UnknownPreset(&'static str),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            LayoutError::InvalidSubGridCount(msg) => write!(f, "Invalid sub-grid count: {}", msg),
            LayoutError::InvalidScale(msg) => write!(f, "Invalid scale: {}", msg),
            LayoutError::UnknownPreset(msg) => write!(f, "Unknown layout preset: {}", msg),
        }
    }
}

impl core::error::Error for LayoutError {}
