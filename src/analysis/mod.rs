//! Analysis of the composed image

/// Marker shape parsing, orientation-aware search and roughness
pub mod markers;
