//! PNG export of composed images with marker highlighting

use image::{ImageBuffer, Rgba};
use ndarray::Array2;

use crate::io::configuration::{MARKER_COLOR, OFF_COLOR, ON_COLOR};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::grid::PixelGrid;

/// Export a pixel grid as a PNG, one image pixel per grid pixel
///
/// Cells set in `highlight` use the marker colour; other set pixels use the
/// foreground colour and unset pixels the background colour.
///
/// # Errors
///
/// Returns an error if:
/// - The highlight mask does not match the grid dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &PixelGrid,
    highlight: Option<&Array2<bool>>,
    output_path: &str,
) -> Result<()> {
    let side = grid.side();
    if let Some(mask) = highlight {
        if mask.dim() != (side, side) {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!(
                    "highlight mask is {:?}, image is {side}x{side}",
                    mask.dim()
                ),
            });
        }
    }

    let img = ImageBuffer::from_fn(side as u32, side as u32, |x, y| {
        let (row, col) = (y as usize, x as usize);
        let marked = highlight
            .and_then(|mask| mask.get((row, col)).copied())
            .unwrap_or(false);
        let color = if marked {
            MARKER_COLOR
        } else if grid.get(row, col) {
            ON_COLOR
        } else {
            OFF_COLOR
        };
        Rgba(color)
    });

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
