//! Marker shape search over the composed image
//!
//! A marker is a sparse set of cells that must all be set. The composed
//! image's orientation is unknown, so every orientation is scanned until one
//! contains at least one marker.

use ndarray::Array2;

use crate::io::configuration::{MARKER_BLANK, PIXEL_OFF, PIXEL_ON, SEA_MONSTER_PATTERN};
use crate::io::error::{AlgorithmError, Result, computation_error, invalid_parameter};
use crate::spatial::grid::PixelGrid;
use crate::spatial::orientation::Orientation;

/// Sparse marker shape as offsets `[dx, dy]` from its top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerShape {
    offsets: Vec<[usize; 2]>,
    width: usize,
    height: usize,
}

impl MarkerShape {
    /// Parse a text pattern where `#` marks a required cell
    ///
    /// Spaces and `.` are unconstrained cells. Leading spaces are significant,
    /// so patterns must not be trimmed before parsing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the pattern contains another character
    /// or has no `#` cell
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        for (row, line) in pattern.lines().enumerate() {
            if let Some(symbol) = line
                .chars()
                .find(|&c| c != PIXEL_ON && c != PIXEL_OFF && c != MARKER_BLANK)
            {
                return Err(invalid_parameter(
                    "marker",
                    &symbol,
                    &format!("unexpected character in pattern row {row}"),
                ));
            }
        }

        let offsets: Vec<_> = set_cells(pattern).collect();
        if offsets.is_empty() {
            return Err(invalid_parameter(
                "marker",
                &pattern,
                &"pattern has no set cells",
            ));
        }
        Ok(Self::from_offsets(offsets))
    }

    /// The default three-row sea monster
    pub fn sea_monster() -> Self {
        Self::from_offsets(set_cells(SEA_MONSTER_PATTERN).collect())
    }

    fn from_offsets(offsets: Vec<[usize; 2]>) -> Self {
        let width = offsets.iter().map(|o| o[0] + 1).max().unwrap_or(0);
        let height = offsets.iter().map(|o| o[1] + 1).max().unwrap_or(0);
        Self {
            offsets,
            width,
            height,
        }
    }

    /// Required cells as `[dx, dy]`
    pub fn offsets(&self) -> &[[usize; 2]] {
        &self.offsets
    }

    /// Number of required cells
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the shape has no required cells
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Columns spanned by the shape
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Rows spanned by the shape
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether every required cell is set with the shape's corner at `[x, y]`
    pub fn matches_at(&self, image: &PixelGrid, anchor: [usize; 2]) -> bool {
        self.offsets
            .iter()
            .all(|&[dx, dy]| image.get(anchor[1] + dy, anchor[0] + dx))
    }
}

fn set_cells(pattern: &str) -> impl Iterator<Item = [usize; 2]> + '_ {
    pattern.lines().enumerate().flat_map(|(dy, line)| {
        line.chars()
            .enumerate()
            .filter(|&(_, symbol)| symbol == PIXEL_ON)
            .map(move |(dx, _)| [dx, dy])
    })
}

/// Result of a successful marker search
#[derive(Debug, Clone)]
pub struct MarkerReport {
    /// Orientation of the composed image in which markers were found
    pub orientation: Orientation,
    /// The composed image in that orientation
    pub image: PixelGrid,
    /// Top-left corners `[x, y]` of every marker occurrence
    pub anchors: Vec<[usize; 2]>,
    /// Set pixels in the whole image
    pub set_pixels: usize,
    /// Required cells per marker
    pub marker_size: usize,
    /// Set pixels minus those consumed by markers
    pub roughness: usize,
}

impl MarkerReport {
    /// Number of marker occurrences
    pub fn hits(&self) -> usize {
        self.anchors.len()
    }

    /// Cells covered by any recognised marker, in the report's orientation
    pub fn marker_mask(&self, shape: &MarkerShape) -> Array2<bool> {
        let side = self.image.side();
        let mut mask = Array2::from_elem((side, side), false);
        for anchor in &self.anchors {
            for &[dx, dy] in shape.offsets() {
                if let Some(cell) = mask.get_mut((anchor[1] + dy, anchor[0] + dx)) {
                    *cell = true;
                }
            }
        }
        mask
    }
}

/// Every anchor in one orientation of the image where the whole shape is set
///
/// Only anchors that keep the shape's bounding box inside the image are
/// tested; a shape larger than the image yields no anchors.
pub fn find_anchors(image: &PixelGrid, shape: &MarkerShape) -> Vec<[usize; 2]> {
    let side = image.side();
    if shape.width() > side || shape.height() > side {
        return Vec::new();
    }

    let mut anchors = Vec::new();
    for y in 0..=side - shape.height() {
        for x in 0..=side - shape.width() {
            if shape.matches_at(image, [x, y]) {
                anchors.push([x, y]);
            }
        }
    }
    anchors
}

/// Search the image's orientations for the marker and compute roughness
///
/// Orientations are tried in `Orientation::ALL` order and the first with at
/// least one hit is reported.
///
/// # Errors
///
/// Returns `MarkerNotFound` if no orientation contains the marker, or a
/// computation error if the markers claim more cells than are set
pub fn search(image: &PixelGrid, shape: &MarkerShape) -> Result<MarkerReport> {
    for orientation in Orientation::ALL {
        let oriented = orientation.apply(image);
        let anchors = find_anchors(&oriented, shape);
        if anchors.is_empty() {
            continue;
        }

        let set_pixels = oriented.count_set();
        let roughness = set_pixels
            .checked_sub(anchors.len() * shape.len())
            .ok_or_else(|| {
                computation_error(
                    "roughness",
                    &format!(
                        "{} markers of {} cells exceed {set_pixels} set pixels",
                        anchors.len(),
                        shape.len()
                    ),
                )
            })?;

        log::info!(
            "found {} markers in orientation {orientation}, roughness {roughness}",
            anchors.len()
        );
        return Ok(MarkerReport {
            orientation,
            image: oriented,
            anchors,
            set_pixels,
            marker_size: shape.len(),
            roughness,
        });
    }

    Err(AlgorithmError::MarkerNotFound {
        marker_size: shape.len(),
        image_side: image.side(),
    })
}
