//! Frontier-growing placement solver
//!
//! Starting from one seed tile, the solver repeatedly scans the empty
//! positions adjacent to the assembly and commits a tile orientation wherever
//! exactly one candidate agrees with every placed neighbour. Puzzle inputs
//! have a unique assembly, so no backtracking is needed: a pass that commits
//! nothing, or a position with several fits, means the input is inconsistent.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::algorithm::bitset::TilePool;
use crate::algorithm::catalog::{OrientedTile, TileCatalog, TileId};
use crate::io::error::{AlgorithmError, Result, computation_error, invalid_source};
use crate::spatial::edges::Side;
use crate::spatial::grid::BoundingBox;
use crate::spatial::orientation::Orientation;

/// A tile committed to a grid position in a specific orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Grid position `[x, y]`; x grows east, y grows south
    pub position: [i32; 2],
    /// Placed tile
    pub tile_id: TileId,
    /// Orientation the tile was placed in
    pub orientation: Orientation,
}

/// Accumulated placements keyed by position, remembering placement order
#[derive(Debug, Clone, Default)]
pub struct PlacementMap {
    by_position: HashMap<[i32; 2], Placement>,
    order: Vec<[i32; 2]>,
}

impl PlacementMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, placement: Placement) {
        if self
            .by_position
            .insert(placement.position, placement)
            .is_none()
        {
            self.order.push(placement.position);
        }
    }

    /// Placement at a position
    pub fn get(&self, position: [i32; 2]) -> Option<&Placement> {
        self.by_position.get(&position)
    }

    /// Whether a position is occupied
    pub fn contains(&self, position: [i32; 2]) -> bool {
        self.by_position.contains_key(&position)
    }

    /// Number of placed tiles
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been placed
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Placements in the order they were committed
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.order
            .iter()
            .filter_map(|position| self.by_position.get(position))
    }

    /// Smallest box containing every placed position
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut positions = self.order.iter();
        let mut bounds = BoundingBox::around(*positions.next()?);
        for &position in positions {
            bounds.include(position);
        }
        Some(bounds)
    }

    /// Whether the placed positions fill a `k×k` square with no gaps
    pub fn is_solid_square(&self) -> bool {
        self.bounds().is_some_and(|bounds| {
            bounds.width() == bounds.height() && bounds.width() * bounds.height() == self.len()
        })
    }

    /// Tiles per row and column of a solid square assembly
    pub fn side_length(&self) -> Option<usize> {
        if self.is_solid_square() {
            self.bounds().map(|bounds| bounds.width())
        } else {
            None
        }
    }

    /// Placements at the four extreme corners
    ///
    /// Ordered (min x, min y), (max x, min y), (min x, max y), (max x, max y).
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the map is empty or a corner position is unoccupied
    pub fn corners(&self) -> Result<[Placement; 4]> {
        let bounds = self
            .bounds()
            .ok_or_else(|| invalid_source(&"no tiles have been placed"))?;
        let corner = |x: i32, y: i32| {
            self.get([x, y]).copied().ok_or_else(|| {
                invalid_source(&format!("corner position ({x}, {y}) is empty"))
            })
        };
        Ok([
            corner(bounds.min[0], bounds.min[1])?,
            corner(bounds.max[0], bounds.min[1])?,
            corner(bounds.min[0], bounds.max[1])?,
            corner(bounds.max[0], bounds.max[1])?,
        ])
    }

    /// Product of the four corner tile identifiers
    ///
    /// # Errors
    ///
    /// Returns an error if a corner is missing or the product overflows `u64`
    pub fn corner_product(&self) -> Result<u64> {
        self.corners()?
            .iter()
            .try_fold(1_u64, |product, placement| product.checked_mul(placement.tile_id))
            .ok_or_else(|| computation_error("corner product", &"product exceeds u64 range"))
    }
}

impl fmt::Display for PlacementMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(bounds) = self.bounds() else {
            return Ok(());
        };
        for y in bounds.min[1]..=bounds.max[1] {
            if y > bounds.min[1] {
                writeln!(f)?;
            }
            for x in bounds.min[0]..=bounds.max[0] {
                match self.get([x, y]) {
                    Some(placement) => write!(f, "{:>6}", placement.tile_id)?,
                    None => write!(f, "{:>6}", "-")?,
                }
            }
        }
        Ok(())
    }
}

/// Pass-by-pass placement state over a borrowed catalog
pub struct PlacementSolver<'a> {
    catalog: &'a TileCatalog,
    map: PlacementMap,
    pool: TilePool,
    pass: usize,
}

impl<'a> PlacementSolver<'a> {
    /// Seed the solver with the first catalog tile at the origin, unrotated
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the catalog is empty
    pub fn new(catalog: &'a TileCatalog) -> Result<Self> {
        let seed = catalog
            .tile_at(0)
            .ok_or_else(|| invalid_source(&"cannot solve an empty catalog"))?;

        let mut pool = TilePool::full(catalog.len());
        pool.remove(0);

        let mut map = PlacementMap::new();
        map.insert(Placement {
            position: [0, 0],
            tile_id: seed.id(),
            orientation: Orientation::Identity,
        });
        log::debug!("seeded tile {} at (0, 0)", seed.id());

        Ok(Self {
            catalog,
            map,
            pool,
            pass: 0,
        })
    }

    /// Placements committed so far
    pub const fn placement_map(&self) -> &PlacementMap {
        &self.map
    }

    /// Number of tiles still unplaced
    pub fn remaining(&self) -> usize {
        self.pool.count()
    }

    /// Number of passes run so far
    pub const fn pass(&self) -> usize {
        self.pass
    }

    /// Whether every tile has been placed
    pub fn is_complete(&self) -> bool {
        self.pool.is_empty()
    }

    /// Empty positions 4-adjacent to a placement, in ascending `[x, y]` order
    pub fn attachable_positions(&self) -> BTreeSet<[i32; 2]> {
        self.map
            .iter()
            .flat_map(|placement| Side::ALL.map(|side| side.step(placement.position)))
            .filter(|position| !self.map.contains(*position))
            .collect()
    }

    /// Placed neighbours of a position, with the side of `position` they touch
    pub fn placed_neighbours(&self, position: [i32; 2]) -> Vec<(Side, &'a OrientedTile)> {
        Side::ALL
            .iter()
            .filter_map(|&side| {
                let placement = self.map.get(side.step(position))?;
                let variant = self
                    .catalog
                    .variant(placement.tile_id, placement.orientation)?;
                Some((side, variant))
            })
            .collect()
    }

    /// Find the unique unplaced tile orientation that fits a position
    ///
    /// Returns the catalog index and orientation of the fit, or `None` when no
    /// candidate agrees with every placed neighbour.
    ///
    /// # Errors
    ///
    /// Returns `AmbiguousPlacement` if more than one candidate fits
    pub fn find_match(&self, position: [i32; 2]) -> Result<Option<(usize, Orientation)>> {
        let neighbours = self.placed_neighbours(position);
        if neighbours.is_empty() {
            return Ok(None);
        }

        let mut fits = Vec::new();
        for index in self.pool.iter() {
            let Some(tile) = self.catalog.tile_at(index) else {
                continue;
            };
            for variant in tile.variants() {
                let agrees = neighbours
                    .iter()
                    .all(|(side, neighbour)| variant.edges.fits_against(*side, &neighbour.edges));
                if agrees {
                    fits.push((index, tile.id(), variant.orientation));
                }
            }
        }

        match fits.as_slice() {
            [] => Ok(None),
            [(index, _, orientation)] => Ok(Some((*index, *orientation))),
            _ => Err(AlgorithmError::AmbiguousPlacement {
                position,
                candidates: fits
                    .iter()
                    .map(|&(_, id, orientation)| (id, orientation))
                    .collect(),
            }),
        }
    }

    fn commit(&mut self, position: [i32; 2], index: usize, orientation: Orientation) -> Result<()> {
        let tile_id = self
            .catalog
            .tile_at(index)
            .map(|tile| tile.id())
            .ok_or_else(|| invalid_source(&format!("catalog has no tile at index {index}")))?;
        self.pool.remove(index);
        self.map.insert(Placement {
            position,
            tile_id,
            orientation,
        });
        log::debug!(
            "pass {}: placed tile {tile_id} ({orientation}) at ({}, {})",
            self.pass,
            position[0],
            position[1]
        );
        Ok(())
    }

    /// Run one pass over the attachable positions
    ///
    /// Returns whether tiles remain to be placed afterwards.
    ///
    /// # Errors
    ///
    /// Returns `Unsolvable` if the pass commits nothing while tiles remain,
    /// or `AmbiguousPlacement` if a position has several fits
    pub fn step_pass(&mut self) -> Result<bool> {
        if self.pool.is_empty() {
            return Ok(false);
        }
        self.pass += 1;

        let mut committed = 0;
        for position in self.attachable_positions() {
            if self.pool.is_empty() {
                break;
            }
            if let Some((index, orientation)) = self.find_match(position)? {
                self.commit(position, index, orientation)?;
                committed += 1;
            }
        }

        if committed == 0 {
            return Err(AlgorithmError::Unsolvable {
                pass: self.pass,
                placed: self.map.len(),
                remaining: self.pool.count(),
            });
        }
        Ok(!self.pool.is_empty())
    }

    /// Run passes until every tile is placed and return the completed map
    ///
    /// # Errors
    ///
    /// Propagates pass errors, and returns `InvalidSourceData` if the finished
    /// assembly is not a solid square
    pub fn finish(mut self) -> Result<PlacementMap> {
        while self.step_pass()? {}

        if !self.map.is_solid_square() {
            return Err(invalid_source(&format!(
                "{} tiles assembled into a non-square layout",
                self.map.len()
            )));
        }
        log::info!(
            "assembled {} tiles in {} passes",
            self.map.len(),
            self.pass
        );
        Ok(self.map)
    }
}

/// Assemble every catalog tile into a completed placement map
///
/// # Errors
///
/// Returns an error if the catalog is empty, the placement is unsolvable or
/// ambiguous, or the result is not square
pub fn solve(catalog: &TileCatalog) -> Result<PlacementMap> {
    PlacementSolver::new(catalog)?.finish()
}
