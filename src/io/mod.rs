//! Input/output operations, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Puzzle format constants and output settings
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG export of composed images
pub mod image;
/// Puzzle text parsing
pub mod input;
/// Progress bars for batch processing
pub mod progress;
