//! Puzzle format constants and runtime configuration defaults

// Pixel symbols shared by tile input, marker patterns and text rendering
/// Character for a set pixel
pub const PIXEL_ON: char = '#';
/// Character for an unset pixel
pub const PIXEL_OFF: char = '.';
/// Character treated as an unset cell inside marker patterns
pub const MARKER_BLANK: char = ' ';

/// Header that opens every tile block in the puzzle text format
pub const TILE_HEADER_PREFIX: &str = "Tile ";
/// Terminator after the tile identifier in a header line
pub const TILE_HEADER_SUFFIX: char = ':';

/// Smallest tile side that still leaves an interior once the border ring is stripped
pub const MIN_TILE_SIDE: usize = 3;

/// Default marker shape searched for in the composed image
pub const SEA_MONSTER_PATTERN: &str = concat!(
    "                  # \n",
    "#    ##    ##    ###\n",
    " #  #  #  #  #  #   ",
);

// Input discovery
/// Extension of puzzle input files picked up from a directory target
pub const INPUT_EXTENSION: &str = "txt";

// Output settings
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_image";
/// Extension of exported images
pub const OUTPUT_EXTENSION: &str = "png";

// Export palette
/// RGBA colour for set pixels outside any marker
pub const ON_COLOR: [u8; 4] = [30, 60, 140, 255];
/// RGBA colour for unset pixels
pub const OFF_COLOR: [u8; 4] = [210, 225, 240, 255];
/// RGBA colour for pixels covered by a recognised marker
pub const MARKER_COLOR: [u8; 4] = [220, 70, 40, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
