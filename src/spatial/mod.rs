//! Spatial data structures and grid transforms
//!
//! This module contains spatial-related functionality including:
//! - Square pixel grids and placement bounds
//! - The eight dihedral orientations of a grid
//! - Border edge extraction used for tile matching

/// Border edge extraction and side geometry
pub mod edges;
/// Pixel grid storage, transforms and bounding boxes
pub mod grid;
/// Dihedral orientations of square grids
pub mod orientation;

pub use grid::{BoundingBox, PixelGrid};
pub use orientation::Orientation;
