//! Tests for puzzle text parsing

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use tileseam::AlgorithmError;
    use tileseam::io::input::{parse_tiles, puzzle_files, read_tiles};

    const SAMPLE: &str = include_str!("../../data/sample_tiles.txt");

    // Tests the sample parses into nine 10x10 tiles in input order
    // Verified by reversing the block order
    #[test]
    fn test_parse_sample() {
        let tiles = parse_tiles(SAMPLE).unwrap();

        assert_eq!(tiles.len(), 9);
        let ids: Vec<_> = tiles.iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            vec![2311, 1951, 1171, 1427, 1489, 2473, 2971, 2729, 3079]
        );
        assert!(tiles.iter().all(|(_, grid)| grid.side() == 10));
    }

    // Tests extra blank lines and trailing whitespace are tolerated
    // Verified by treating every blank line as a new block
    #[test]
    fn test_blank_lines_and_trailing_whitespace() {
        let input = "\n\nTile 1:  \n#.\n.#  \n\n\n\nTile 2:\n..\n##\n";
        let tiles = parse_tiles(input).unwrap();

        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].1.to_string(), "#.\n.#");
        assert_eq!(tiles[1].0, 2);
    }

    // Tests a missing or non-numeric header is rejected
    // Verified by defaulting unparsable ids to zero
    #[test]
    fn test_bad_headers() {
        assert!(matches!(
            parse_tiles("#.\n.#\n"),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
        assert!(matches!(
            parse_tiles("Tile abc:\n#.\n.#\n"),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
    }

    // Tests a ragged tile is reported with its own id
    // Verified by forwarding the placeholder id
    #[test]
    fn test_ragged_tile_tagged() {
        let result = parse_tiles("Tile 42:\n#..\n#.\n...\n");
        assert!(matches!(
            result,
            Err(AlgorithmError::MalformedTile { tile_id: 42, .. })
        ));
    }

    // Tests empty input yields no tiles
    // Verified by erroring on empty input
    #[test]
    fn test_empty_input() {
        assert!(parse_tiles("").unwrap().is_empty());
    }

    // Tests reading from disk and the error for a missing file
    // Verified by returning an empty list on read failure
    #[test]
    fn test_read_tiles() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("puzzle.txt");
        fs::write(&path, SAMPLE).unwrap();

        assert_eq!(read_tiles(&path).unwrap().len(), 9);
        assert!(matches!(
            read_tiles(temp_dir.path().join("missing.txt")),
            Err(AlgorithmError::FileSystem { .. })
        ));
    }

    // Tests directory listing keeps only puzzle files, sorted by name
    // Verified by removing the sort
    #[test]
    fn test_puzzle_files_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.png", "notes.md"] {
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let files = puzzle_files(temp_dir.path()).unwrap();
        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("c.txt")]
        );
    }

    // Tests a directory that cannot be listed is named in the error
    // Verified by converting the I/O error without its path
    #[test]
    fn test_puzzle_files_error_names_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent");

        match puzzle_files(&missing) {
            Err(AlgorithmError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, missing);
                assert_eq!(operation, "list puzzles");
            }
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
    }
}
