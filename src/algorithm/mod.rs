/// End-to-end assembly pipeline
pub mod assembly;
/// Unplaced tile pool backed by a bitset
pub mod bitset;
/// Tile catalog with cached orientations and edges
pub mod catalog;
/// Tile interior compositing into a single image
pub mod compositor;
/// Frontier-growing placement solver
pub mod placement;
