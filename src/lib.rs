//! Reassembly of rotated and flipped square image tiles by border matching
//!
//! Tiles are placed one at a time wherever exactly one orientation of one
//! unplaced tile agrees with every placed neighbour's facing edge. The
//! completed assembly yields the product of its corner tile ids; stripping
//! each tile's border ring and joining the interiors yields an image that is
//! searched, in all eight orientations, for a sparse marker shape.

/// Placement solving, tile catalog and image compositing
pub mod algorithm;
/// Marker search over the composed image
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Pixel grids, orientations and edges
pub mod spatial;

pub use algorithm::assembly::Assembly;
pub use io::error::{AlgorithmError, Result};
