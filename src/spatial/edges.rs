//! Border edges of oriented grids, the sole matching key between neighbours

use std::fmt;

use bitvec::prelude::*;

use crate::io::configuration::{PIXEL_OFF, PIXEL_ON};
use crate::spatial::grid::PixelGrid;
use crate::spatial::orientation::Orientation;

/// One side of a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top row
    North,
    /// Right column
    East,
    /// Bottom row
    South,
    /// Left column
    West,
}

impl Side {
    /// All sides, clockwise from north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The side a neighbour presents back across a shared border
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Step `[dx, dy]` from a position to its neighbour on this side (y grows south)
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::North => [0, -1],
            Self::East => [1, 0],
            Self::South => [0, 1],
            Self::West => [-1, 0],
        }
    }

    /// Neighbouring position on this side
    pub const fn step(self, pos: [i32; 2]) -> [i32; 2] {
        let delta = self.delta();
        [pos[0] + delta[0], pos[1] + delta[1]]
    }
}

/// Border pixels of one side, read left to right or top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    bits: BitVec,
}

impl Edge {
    /// Collect an edge from a pixel sequence
    pub fn from_pixels<I: IntoIterator<Item = bool>>(pixels: I) -> Self {
        Self {
            bits: pixels.into_iter().collect(),
        }
    }

    /// Same pixels read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut bits = self.bits.clone();
        bits.reverse();
        Self { bits }
    }

    /// Number of pixels along the edge
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the edge has no pixels
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            write!(f, "{}", if bit { PIXEL_ON } else { PIXEL_OFF })?;
        }
        Ok(())
    }
}

/// The four edges of one oriented grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSet {
    /// Top row, left to right
    pub north: Edge,
    /// Right column, top to bottom
    pub east: Edge,
    /// Bottom row, left to right
    pub south: Edge,
    /// Left column, top to bottom
    pub west: Edge,
}

impl EdgeSet {
    /// Extract the edges of a grid
    pub fn of(grid: &PixelGrid) -> Self {
        let side = grid.side();
        let last = side.saturating_sub(1);
        Self {
            north: Edge::from_pixels((0..side).map(|col| grid.get(0, col))),
            east: Edge::from_pixels((0..side).map(|row| grid.get(row, last))),
            south: Edge::from_pixels((0..side).map(|col| grid.get(last, col))),
            west: Edge::from_pixels((0..side).map(|row| grid.get(row, 0))),
        }
    }

    /// Edge on one side
    pub const fn get(&self, side: Side) -> &Edge {
        match side {
            Side::North => &self.north,
            Side::East => &self.east,
            Side::South => &self.south,
            Side::West => &self.west,
        }
    }

    /// Edges of the grid after one clockwise quarter turn
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        Self {
            north: self.west.reversed(),
            east: self.north.clone(),
            south: self.east.reversed(),
            west: self.south.clone(),
        }
    }

    /// Edges of the grid after reversing each row
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            north: self.north.reversed(),
            east: self.west.clone(),
            south: self.south.reversed(),
            west: self.east.clone(),
        }
    }

    /// Edges of the grid seen in an orientation, derived without touching pixels
    #[must_use]
    pub fn transformed(&self, orientation: Orientation) -> Self {
        let mut edges = if orientation.is_mirrored() {
            self.mirrored()
        } else {
            self.clone()
        };
        for _ in 0..orientation.quarter_turns() {
            edges = edges.rotated_cw();
        }
        edges
    }

    /// Whether this grid can sit with its `side` against a neighbour whose edges are `other`
    pub fn fits_against(&self, side: Side, other: &Self) -> bool {
        self.get(side) == other.get(side.opposite())
    }
}
