//! The eight orientations of a square grid
//!
//! Orientations form the dihedral group of the square: four clockwise
//! rotations of the base grid, and the same four applied after mirroring each
//! row. Each one derives a fresh grid; nothing is rotated in place.

use std::fmt;

use crate::spatial::grid::PixelGrid;

/// One element of the dihedral group acting on a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Base grid unchanged
    Identity,
    /// One clockwise quarter turn
    Rotate90,
    /// Two clockwise quarter turns
    Rotate180,
    /// Three clockwise quarter turns
    Rotate270,
    /// Each row reversed
    Mirror,
    /// Mirrored, then one clockwise quarter turn
    MirrorRotate90,
    /// Mirrored, then two clockwise quarter turns
    MirrorRotate180,
    /// Mirrored, then three clockwise quarter turns
    MirrorRotate270,
}

impl Orientation {
    /// All orientations in generation order
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::Mirror,
        Self::MirrorRotate90,
        Self::MirrorRotate180,
        Self::MirrorRotate270,
    ];

    /// Whether the base grid is mirrored before rotating
    pub const fn is_mirrored(self) -> bool {
        matches!(
            self,
            Self::Mirror | Self::MirrorRotate90 | Self::MirrorRotate180 | Self::MirrorRotate270
        )
    }

    /// Number of clockwise quarter turns applied after the optional mirror
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Identity | Self::Mirror => 0,
            Self::Rotate90 | Self::MirrorRotate90 => 1,
            Self::Rotate180 | Self::MirrorRotate180 => 2,
            Self::Rotate270 | Self::MirrorRotate270 => 3,
        }
    }

    /// Position of this orientation within `ALL`
    pub const fn index(self) -> usize {
        self.quarter_turns() + if self.is_mirrored() { 4 } else { 0 }
    }

    /// Derive the grid seen in this orientation
    pub fn apply(self, grid: &PixelGrid) -> PixelGrid {
        let mut oriented = if self.is_mirrored() {
            grid.mirror()
        } else {
            grid.clone()
        };
        for _ in 0..self.quarter_turns() {
            oriented = oriented.rotate_cw();
        }
        oriented
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identity => "identity",
            Self::Rotate90 => "rot90",
            Self::Rotate180 => "rot180",
            Self::Rotate270 => "rot270",
            Self::Mirror => "mirror",
            Self::MirrorRotate90 => "mirror+rot90",
            Self::MirrorRotate180 => "mirror+rot180",
            Self::MirrorRotate270 => "mirror+rot270",
        };
        f.write_str(name)
    }
}

/// Derive all eight oriented grids, paired with their orientation
pub fn all_orientations(grid: &PixelGrid) -> Vec<(Orientation, PixelGrid)> {
    Orientation::ALL
        .iter()
        .map(|&orientation| (orientation, orientation.apply(grid)))
        .collect()
}
