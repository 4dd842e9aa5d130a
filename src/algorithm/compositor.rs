//! Merge placed tile interiors into one image
//!
//! The outer ring of every tile exists only to carry the matching edge, so it
//! is dropped; the remaining `(N-2)×(N-2)` blocks are laid out edge to edge.

use ndarray::{Array2, s};

use crate::algorithm::catalog::TileCatalog;
use crate::algorithm::placement::PlacementMap;
use crate::io::error::{Result, invalid_source};
use crate::spatial::grid::PixelGrid;

/// Composite a completed placement map into a single square image
///
/// The result has side `(N-2) * k` for `k×k` tiles of side `N`. Interiors are
/// copied in placement order; tile `[x, y]` lands at column offset
/// `(x - min_x) * (N-2)` and row offset `(y - min_y) * (N-2)`.
///
/// # Errors
///
/// Returns `InvalidSourceData` if the map is not a solid square or refers to
/// a tile orientation missing from the catalog
pub fn compose(map: &PlacementMap, catalog: &TileCatalog) -> Result<PixelGrid> {
    let side = map
        .side_length()
        .ok_or_else(|| invalid_source(&"placement map is not a complete square"))?;
    let bounds = map
        .bounds()
        .ok_or_else(|| invalid_source(&"placement map is empty"))?;
    let interior = catalog.tile_side().saturating_sub(2);
    let mut pixels = Array2::from_elem((side * interior, side * interior), false);

    for placement in map.iter() {
        let variant = catalog
            .variant(placement.tile_id, placement.orientation)
            .ok_or_else(|| {
                invalid_source(&format!(
                    "tile {} is not in the catalog",
                    placement.tile_id
                ))
            })?;

        let col = (placement.position[0] - bounds.min[0]) as usize * interior;
        let row = (placement.position[1] - bounds.min[1]) as usize * interior;
        pixels
            .slice_mut(s![row..row + interior, col..col + interior])
            .assign(&variant.grid.interior());
    }

    let image_side = side * interior;
    log::debug!("composed {side}x{side} tiles into a {image_side}x{image_side} image");
    PixelGrid::from_array(pixels)
}
