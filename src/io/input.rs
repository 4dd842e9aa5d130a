//! Puzzle text parsing into identified pixel grids
//!
//! Input is a sequence of blocks separated by blank lines. Each block opens
//! with a `Tile <id>:` header followed by the tile's rows of `#` and `.`.

use std::path::{Path, PathBuf};

use crate::algorithm::catalog::TileId;
use crate::io::configuration::{INPUT_EXTENSION, TILE_HEADER_PREFIX, TILE_HEADER_SUFFIX};
use crate::io::error::{AlgorithmError, Result, invalid_source, malformed_tile};
use crate::spatial::grid::PixelGrid;

/// Split puzzle text into `(id, grid)` pairs in input order
///
/// # Errors
///
/// Returns `InvalidSourceData` if a header is missing or its id is not a
/// number, and `MalformedTile` if a tile's rows do not form a square `#`/`.` grid
pub fn parse_tiles(input: &str) -> Result<Vec<(TileId, PixelGrid)>> {
    let mut tiles = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in input.lines().map(str::trim_end) {
        if line.is_empty() {
            if !block.is_empty() {
                tiles.push(parse_block(&block)?);
                block.clear();
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        tiles.push(parse_block(&block)?);
    }

    Ok(tiles)
}

/// Read and parse a puzzle file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or any error from `parse_tiles`
pub fn read_tiles<P: AsRef<Path>>(path: P) -> Result<Vec<(TileId, PixelGrid)>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read puzzle",
        source: e,
    })?;
    parse_tiles(&text)
}

/// Puzzle files directly inside a directory, sorted by path
///
/// # Errors
///
/// Returns `FileSystem` naming the directory if it cannot be listed
pub fn puzzle_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let listing_error = |e| AlgorithmError::FileSystem {
        path: dir.to_path_buf(),
        operation: "list puzzles",
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(listing_error)? {
        let path = entry.map_err(listing_error)?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(INPUT_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn parse_block(block: &[&str]) -> Result<(TileId, PixelGrid)> {
    let (header, rows) = block
        .split_first()
        .ok_or_else(|| invalid_source(&"empty tile block"))?;
    let id = parse_header(header)?;
    let grid = PixelGrid::from_rows(rows).map_err(|e| match e {
        AlgorithmError::MalformedTile { reason, .. } => malformed_tile(id, &reason),
        other => other,
    })?;
    Ok((id, grid))
}

fn parse_header(header: &str) -> Result<TileId> {
    let digits = header
        .trim()
        .strip_prefix(TILE_HEADER_PREFIX)
        .and_then(|rest| rest.strip_suffix(TILE_HEADER_SUFFIX))
        .ok_or_else(|| invalid_source(&format!("expected a tile header, found '{header}'")))?;
    digits
        .trim()
        .parse()
        .map_err(|e| invalid_source(&format!("tile id '{digits}' is not a number: {e}")))
}
