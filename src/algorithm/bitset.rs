use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset tracking which catalog tiles are still unplaced
///
/// Indexed by catalog position (0-based), not by tile id. Membership tests
/// and removal are O(1); iteration yields indices in catalog order, which
/// keeps candidate scans deterministic.
#[derive(Clone, Debug)]
pub struct TilePool {
    bits: BitVec,
}

impl TilePool {
    /// Create a pool containing every tile
    pub fn full(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Take a tile out of the pool, reporting whether it was present
    pub fn remove(&mut self, index: usize) -> bool {
        let present = self.contains(index);
        if present {
            self.bits.set(index, false);
        }
        present
    }

    /// Test tile membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no tiles remain
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles remaining
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Remaining tile indices in catalog order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for TilePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TilePool({} remaining: {:?})",
            self.count(),
            self.iter().collect::<Vec<_>>()
        )
    }
}
