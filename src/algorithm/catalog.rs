//! Tile catalog holding every tile's eight oriented variants
//!
//! Built once from parsed input and read-only afterwards. Each variant caches
//! its derived grid and edges so the solver never re-derives them.

use std::collections::HashMap;

use crate::io::configuration::MIN_TILE_SIDE;
use crate::io::error::{AlgorithmError, Result, invalid_source, malformed_tile};
use crate::spatial::edges::EdgeSet;
use crate::spatial::grid::PixelGrid;
use crate::spatial::orientation::{Orientation, all_orientations};

/// Tile identifier as given in the puzzle input
pub type TileId = u64;

/// One tile seen in one orientation
#[derive(Debug, Clone)]
pub struct OrientedTile {
    /// Orientation that produced this variant
    pub orientation: Orientation,
    /// Oriented pixel grid
    pub grid: PixelGrid,
    /// Border edges of the oriented grid
    pub edges: EdgeSet,
}

/// A tile identifier with its eight oriented variants
#[derive(Debug, Clone)]
pub struct Tile {
    id: TileId,
    variants: Vec<OrientedTile>,
}

impl Tile {
    /// Derive every orientation of a base grid
    pub fn new(id: TileId, base: &PixelGrid) -> Self {
        let variants = all_orientations(base)
            .into_iter()
            .map(|(orientation, grid)| {
                let edges = EdgeSet::of(&grid);
                OrientedTile {
                    orientation,
                    grid,
                    edges,
                }
            })
            .collect();
        Self { id, variants }
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// All oriented variants in `Orientation::ALL` order
    pub fn variants(&self) -> &[OrientedTile] {
        &self.variants
    }

    /// Variant for one orientation
    pub fn variant(&self, orientation: Orientation) -> Option<&OrientedTile> {
        self.variants.get(orientation.index())
    }

    /// The grid as it appeared in the input
    pub fn base(&self) -> Option<&PixelGrid> {
        self.variant(Orientation::Identity).map(|variant| &variant.grid)
    }
}

/// Immutable collection of tiles indexed by id and by input position
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    index_by_id: HashMap<TileId, usize>,
    tile_side: usize,
}

impl TileCatalog {
    /// Build the catalog, deriving all orientations of every tile
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No tiles are given
    /// - Two tiles share an identifier
    /// - A tile's side differs from the first tile's side
    /// - The tile side is too small to leave an interior
    pub fn build(raw_tiles: Vec<(TileId, PixelGrid)>) -> Result<Self> {
        let tile_side = raw_tiles
            .first()
            .map(|(_, grid)| grid.side())
            .ok_or_else(|| invalid_source(&"tile set is empty"))?;

        let mut tiles = Vec::with_capacity(raw_tiles.len());
        let mut index_by_id = HashMap::with_capacity(raw_tiles.len());

        for (id, grid) in raw_tiles {
            if grid.side() != tile_side {
                return Err(malformed_tile(
                    id,
                    &format!(
                        "side {} differs from the catalog tile side {tile_side}",
                        grid.side()
                    ),
                ));
            }
            if grid.side() < MIN_TILE_SIDE {
                return Err(malformed_tile(
                    id,
                    &format!(
                        "side {} leaves no interior (minimum {MIN_TILE_SIDE})",
                        grid.side()
                    ),
                ));
            }
            if index_by_id.insert(id, tiles.len()).is_some() {
                return Err(invalid_source(&format!("duplicate tile id {id}")));
            }
            tiles.push(Tile::new(id, &grid));
        }

        log::debug!(
            "catalog built: {} tiles of side {tile_side}, {} variants",
            tiles.len(),
            tiles.len() * Orientation::ALL.len()
        );

        Ok(Self {
            tiles,
            index_by_id,
            tile_side,
        })
    }

    /// Build from tiles whose grids are still text rows
    ///
    /// # Errors
    ///
    /// Returns an error if any grid is malformed, or for any reason listed on `build`
    pub fn from_rows<S: AsRef<str>>(raw_tiles: &[(TileId, Vec<S>)]) -> Result<Self> {
        let grids = raw_tiles
            .iter()
            .map(|(id, rows)| {
                PixelGrid::from_rows(rows.as_slice())
                    .map(|grid| (*id, grid))
                    .map_err(|e| match e {
                        AlgorithmError::MalformedTile { reason, .. } => malformed_tile(*id, &reason),
                        other => other,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::build(grids)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Side length shared by every tile
    pub const fn tile_side(&self) -> usize {
        self.tile_side
    }

    /// Look a tile up by identifier
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.index_of(id).and_then(|index| self.tiles.get(index))
    }

    /// Catalog position of a tile identifier
    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    /// Tile at a catalog position
    pub fn tile_at(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// One oriented variant of a tile
    pub fn variant(&self, id: TileId, orientation: Orientation) -> Option<&OrientedTile> {
        self.get(id).and_then(|tile| tile.variant(orientation))
    }

    /// Tiles in input order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Every `(tile, variant)` pair
    pub fn variants(&self) -> impl Iterator<Item = (&Tile, &OrientedTile)> {
        self.tiles
            .iter()
            .flat_map(|tile| tile.variants().iter().map(move |variant| (tile, variant)))
    }
}
