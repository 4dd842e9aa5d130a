//! Error types for tile assembly, compositing and marker search

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::catalog::TileId;
use crate::spatial::orientation::Orientation;

/// Main error type for all assembly operations
///
/// Every variant is fatal: a well-formed puzzle always has exactly one
/// assembly and one marker-bearing orientation, so any violation points at
/// corrupted input rather than something worth retrying.
#[derive(Debug)]
pub enum AlgorithmError {
    /// A tile grid is not square, is ragged, or disagrees with the catalog's tile size
    MalformedTile {
        /// Identifier of the offending tile (0 when not yet known)
        tile_id: TileId,
        /// Description of what's wrong with the tile
        reason: String,
    },

    /// Input data doesn't meet algorithm requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// A full pass over the attachable frontier committed no placement
    Unsolvable {
        /// Solver pass in which no progress was made
        pass: usize,
        /// Number of tiles placed so far
        placed: usize,
        /// Number of tiles still waiting for a position
        remaining: usize,
    },

    /// More than one tile orientation fits a position
    AmbiguousPlacement {
        /// Grid position `[x, y]` under test
        position: [i32; 2],
        /// Every tile and orientation that satisfied the neighbour constraints
        candidates: Vec<(TileId, Orientation)>,
    },

    /// No orientation of the composed image contains the marker shape
    MarkerNotFound {
        /// Number of set cells in the marker shape
        marker_size: usize,
        /// Side length of the searched image
        image_side: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the composed image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTile { tile_id, reason } => {
                write!(f, "Malformed tile {tile_id}: {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::Unsolvable {
                pass,
                placed,
                remaining,
            } => {
                write!(
                    f,
                    "No solution: pass {pass} placed nothing ({placed} placed, {remaining} remaining)"
                )
            }
            Self::AmbiguousPlacement {
                position,
                candidates,
            } => {
                let listed = candidates
                    .iter()
                    .map(|(id, orientation)| format!("{id}/{orientation}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Ambiguous placement at ({}, {}): {} candidates fit [{listed}]",
                    position[0],
                    position[1],
                    candidates.len()
                )
            }
            Self::MarkerNotFound {
                marker_size,
                image_side,
            } => {
                write!(
                    f,
                    "Marker of {marker_size} cells not found in any orientation of the {image_side}x{image_side} image"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a malformed tile error
pub fn malformed_tile(tile_id: TileId, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::MalformedTile {
        tile_id,
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidSourceData {
        reason: reason.to_string(),
    }
}

/// Create an I/O error for a path-related failure
pub fn io_error(msg: &str) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
