//! End-to-end pipeline from raw tiles to corner product and roughness

use crate::algorithm::catalog::{TileCatalog, TileId};
use crate::algorithm::compositor::compose;
use crate::algorithm::placement::{PlacementMap, solve};
use crate::analysis::markers::{MarkerReport, MarkerShape, search};
use crate::io::error::{Result, invalid_source};
use crate::io::input::parse_tiles;
use crate::spatial::grid::PixelGrid;

/// A solved tile set: the catalog and its completed placement map
#[derive(Debug, Clone)]
pub struct Assembly {
    catalog: TileCatalog,
    placements: PlacementMap,
}

impl Assembly {
    /// Solve a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the placement is unsolvable, ambiguous or not square
    pub fn from_catalog(catalog: TileCatalog) -> Result<Self> {
        let placements = solve(&catalog)?;
        Ok(Self {
            catalog,
            placements,
        })
    }

    /// Build the catalog from raw tiles and solve it
    ///
    /// # Errors
    ///
    /// Returns an error if the tiles are malformed or cannot be assembled
    pub fn from_tiles(raw_tiles: Vec<(TileId, PixelGrid)>) -> Result<Self> {
        Self::from_catalog(TileCatalog::build(raw_tiles)?)
    }

    /// Parse puzzle text and solve it
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or the tiles cannot be assembled
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_tiles(parse_tiles(input)?)
    }

    /// Pair a catalog with a map that was solved separately
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the map does not place every catalog
    /// tile or is not a solid square
    pub fn from_parts(catalog: TileCatalog, placements: PlacementMap) -> Result<Self> {
        if placements.len() != catalog.len() || !placements.is_solid_square() {
            return Err(invalid_source(&format!(
                "placement map holds {} of {} tiles or is not square",
                placements.len(),
                catalog.len()
            )));
        }
        Ok(Self {
            catalog,
            placements,
        })
    }

    /// Tiles and their orientations
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Completed placement map
    pub const fn placements(&self) -> &PlacementMap {
        &self.placements
    }

    /// Product of the four corner tile identifiers
    ///
    /// # Errors
    ///
    /// Returns an error if the product overflows `u64`
    pub fn corner_product(&self) -> Result<u64> {
        self.placements.corner_product()
    }

    /// Composite the tile interiors into one image
    ///
    /// # Errors
    ///
    /// Returns an error if a placement refers to an unknown tile
    pub fn compose(&self) -> Result<PixelGrid> {
        compose(&self.placements, &self.catalog)
    }

    /// Composite the image and search it for a marker shape
    ///
    /// # Errors
    ///
    /// Returns an error if compositing fails or the marker appears in no orientation
    pub fn find_markers(&self, shape: &MarkerShape) -> Result<MarkerReport> {
        search(&self.compose()?, shape)
    }
}
