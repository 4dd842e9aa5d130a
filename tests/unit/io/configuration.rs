//! Tests for puzzle format constants and display settings

#[cfg(test)]
mod tests {
    use tileseam::io::configuration::{
        INPUT_EXTENSION, MARKER_BLANK, MARKER_COLOR, MAX_INDIVIDUAL_PROGRESS_BARS, MIN_TILE_SIDE,
        OFF_COLOR, ON_COLOR, OUTPUT_EXTENSION, OUTPUT_SUFFIX, PIXEL_OFF, PIXEL_ON,
        PROGRESS_BAR_WIDTH, SEA_MONSTER_PATTERN, TILE_HEADER_PREFIX, TILE_HEADER_SUFFIX,
    };

    // Tests pixel symbols are distinct
    // Verified by using '.' for both pixel states
    #[test]
    fn test_pixel_symbols() {
        assert_eq!(PIXEL_ON, '#');
        assert_eq!(PIXEL_OFF, '.');
        assert_ne!(MARKER_BLANK, PIXEL_ON);
        assert_ne!(MARKER_BLANK, PIXEL_OFF);
    }

    // Tests the header constants frame a tile id
    // Verified by dropping the trailing colon
    #[test]
    fn test_tile_header_format() {
        let header = format!("{TILE_HEADER_PREFIX}2311{TILE_HEADER_SUFFIX}");
        assert_eq!(header, "Tile 2311:");
    }

    // Tests the minimum tile side leaves a non-empty interior
    // Verified by lowering the minimum to two
    #[test]
    fn test_min_tile_side() {
        assert_eq!(MIN_TILE_SIDE, 3);
    }

    // Tests the sea monster pattern keeps its three rows of equal width
    // Verified by trimming trailing spaces from the first row
    #[test]
    fn test_sea_monster_pattern_rows() {
        let rows: Vec<_> = SEA_MONSTER_PATTERN.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 20));
        assert_eq!(SEA_MONSTER_PATTERN.matches(PIXEL_ON).count(), 15);
    }

    // Tests file naming values
    // Verified by changing the output suffix
    #[test]
    fn test_file_naming() {
        assert_eq!(INPUT_EXTENSION, "txt");
        assert_eq!(OUTPUT_SUFFIX, "_image");
        assert_eq!(OUTPUT_EXTENSION, "png");
    }

    // Tests the export palette uses three opaque, distinct colours
    // Verified by reusing the foreground colour for markers
    #[test]
    fn test_palette_distinct() {
        assert_ne!(ON_COLOR, OFF_COLOR);
        assert_ne!(ON_COLOR, MARKER_COLOR);
        assert_ne!(OFF_COLOR, MARKER_COLOR);
        for color in [ON_COLOR, OFF_COLOR, MARKER_COLOR] {
            assert_eq!(color[3], 255);
        }
    }

    // Tests progress bar display values
    // Verified by changing bar limits
    #[test]
    fn test_progress_settings() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert_eq!(PROGRESS_BAR_WIDTH, 30);
    }
}
