//! Square binary pixel grids and placement bounds
//!
//! Every tile, every oriented variant and the composed image is a
//! `PixelGrid`. Grids are immutable: transforms return a new grid, so the
//! eight variants of one tile never alias each other.

use std::fmt;

use ndarray::{Array2, ArrayView2, s};

use crate::io::configuration::{PIXEL_OFF, PIXEL_ON};
use crate::io::error::{Result, malformed_tile};

/// Axis-aligned bounding box over placement coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates `[x, y]` (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates `[x, y]` (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Bounding box covering a single position
    pub const fn around(pos: [i32; 2]) -> Self {
        Self { min: pos, max: pos }
    }

    /// Grow the box to include a position
    pub fn include(&mut self, pos: [i32; 2]) {
        self.min = [self.min[0].min(pos[0]), self.min[1].min(pos[1])];
        self.max = [self.max[0].max(pos[0]), self.max[1].max(pos[1])];
    }

    /// Number of columns spanned
    pub const fn width(&self) -> usize {
        (self.max[0] - self.min[0] + 1) as usize
    }

    /// Number of rows spanned
    pub const fn height(&self) -> usize {
        (self.max[1] - self.min[1] + 1) as usize
    }
}

/// Square matrix of on/off pixels indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    pixels: Array2<bool>,
}

impl PixelGrid {
    /// Build a grid from a square boolean array
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the array is not square
    pub fn from_array(pixels: Array2<bool>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows != cols {
            return Err(malformed_tile(
                0,
                &format!("grid is {rows}x{cols}, expected a square"),
            ));
        }
        Ok(Self {
            pixels: pixels.as_standard_layout().into_owned(),
        })
    }

    /// Build a grid from text rows of `#` and `.`
    ///
    /// # Errors
    ///
    /// Returns `MalformedTile` if the rows are ragged, the grid is not square,
    /// or a row contains a character other than `#` or `.`
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != side {
                return Err(malformed_tile(
                    0,
                    &format!("row {index} has {width} pixels, expected {side}"),
                ));
            }
            for symbol in row.chars() {
                match symbol {
                    PIXEL_ON => cells.push(true),
                    PIXEL_OFF => cells.push(false),
                    other => {
                        return Err(malformed_tile(
                            0,
                            &format!("unexpected pixel '{other}' in row {index}"),
                        ));
                    }
                }
            }
        }

        let pixels = Array2::from_shape_vec((side, side), cells)
            .map_err(|e| malformed_tile(0, &e))?;
        Ok(Self { pixels })
    }

    /// Side length in pixels
    pub fn side(&self) -> usize {
        self.pixels.nrows()
    }

    /// Pixel at `(row, col)`, unset outside the grid
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.pixels.get((row, col)).copied().unwrap_or(false)
    }

    /// Read-only view of the underlying pixels
    pub fn view(&self) -> ArrayView2<'_, bool> {
        self.pixels.view()
    }

    /// Rotate 90 degrees clockwise: transpose, then reverse each row
    #[must_use]
    pub fn rotate_cw(&self) -> Self {
        let rotated = self.pixels.t().slice(s![.., ..;-1]).as_standard_layout().into_owned();
        Self { pixels: rotated }
    }

    /// Mirror horizontally by reversing each row
    #[must_use]
    pub fn mirror(&self) -> Self {
        let mirrored = self.pixels.slice(s![.., ..;-1]).as_standard_layout().into_owned();
        Self { pixels: mirrored }
    }

    /// Pixels left after dropping the outermost ring
    pub fn interior(&self) -> ArrayView2<'_, bool> {
        let side = self.side();
        if side < 2 {
            return self.pixels.slice(s![0..0, 0..0]);
        }
        self.pixels.slice(s![1..side - 1, 1..side - 1])
    }

    /// Number of set pixels
    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel).count()
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.pixels.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &pixel in row {
                write!(f, "{}", if pixel { PIXEL_ON } else { PIXEL_OFF })?;
            }
        }
        Ok(())
    }
}
