//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tileseam::io::cli::{Cli, FileProcessor};

    const SAMPLE: &str = include_str!("../../data/sample_tiles.txt");

    fn create_test_cli(args: &[&str]) -> Cli {
        let mut full = vec!["program"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    fn write_sample(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, SAMPLE).unwrap();
        path
    }

    // Tests CLI parsing with only the required target argument
    // Verified by defaulting export to true
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = create_test_cli(&["puzzle.txt"]);

        assert_eq!(cli.target, PathBuf::from("puzzle.txt"));
        assert!(cli.marker.is_none());
        assert!(!cli.export);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
    }

    // Tests short and long flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_flags() {
        let short = create_test_cli(&["puzzle.txt", "-m", "shape.pat", "-e", "-q"]);
        assert_eq!(short.marker, Some(PathBuf::from("shape.pat")));
        assert!(short.export);
        assert!(!short.should_show_progress());

        let long = create_test_cli(&["dir", "--marker", "m", "--export", "--quiet"]);
        assert!(long.export && long.quiet);
    }

    // Tests a single puzzle file yields both answers
    // Verified by reporting the seed tile id instead of the corner product
    #[test]
    fn test_run_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_sample(temp_dir.path(), "sample.txt");

        let mut processor = FileProcessor::new(create_test_cli(&[input.to_str().unwrap(), "-q"]));
        let reports = processor.run().unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].path, input);
        assert_eq!(reports[0].corner_product, 20_899_048_083_289);
        assert_eq!(reports[0].roughness, 273);
        assert_eq!(reports[0].markers, 2);
        assert!(reports[0].exported.is_none());
    }

    // Tests directory targets process only puzzle files, sorted by name
    // Verified by removing the extension filter
    #[test]
    fn test_run_directory() {
        let temp_dir = TempDir::new().unwrap();
        let second = write_sample(temp_dir.path(), "b.txt");
        let first = write_sample(temp_dir.path(), "a.txt");
        fs::write(temp_dir.path().join("notes.md"), "ignored").unwrap();

        let mut processor =
            FileProcessor::new(create_test_cli(&[temp_dir.path().to_str().unwrap(), "-q"]));
        let reports = processor.run().unwrap();

        let paths: Vec<_> = reports.iter().map(|r| r.path.clone()).collect();
        assert_eq!(paths, vec![first, second]);
    }

    // Tests an empty directory is not an error
    // Verified by adding an error for empty directories
    #[test]
    fn test_process_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut processor =
            FileProcessor::new(create_test_cli(&[temp_dir.path().to_str().unwrap(), "-q"]));

        assert!(processor.run().unwrap().is_empty());
        assert!(processor.process().is_ok());
    }

    // Tests error handling for missing targets
    // Verified by treating missing targets as empty directories
    #[test]
    fn test_process_nonexistent_target() {
        let mut processor = FileProcessor::new(create_test_cli(&["nonexistent.txt", "-q"]));
        assert!(processor.process().is_err());
    }

    // Tests malformed puzzle text fails the run
    // Verified by skipping files that fail to parse
    #[test]
    fn test_process_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("broken.txt");
        fs::write(&input, "Tile 1:\n#.\n#\n").unwrap();

        let mut processor = FileProcessor::new(create_test_cli(&[input.to_str().unwrap(), "-q"]));
        assert!(processor.run().is_err());
    }

    // Tests progress displays are cleaned up when a later file fails
    // Verified by returning before finishing the progress manager
    #[test]
    fn test_failed_batch_finishes_progress() {
        let temp_dir = TempDir::new().unwrap();
        write_sample(temp_dir.path(), "a.txt");
        fs::write(temp_dir.path().join("b.txt"), "Tile 1:\n#.\n#\n").unwrap();

        let mut processor =
            FileProcessor::new(create_test_cli(&[temp_dir.path().to_str().unwrap()]));
        assert!(processor.run().is_err());

        let progress = processor.progress_manager().unwrap();
        assert!(progress.is_finished());
        assert_eq!(progress.file_progress(0), Some((9, 9)));
    }

    // Tests quiet mode runs without a progress display
    // Verified by always creating the progress manager
    #[test]
    fn test_quiet_has_no_progress() {
        let processor = FileProcessor::new(create_test_cli(&["puzzle.txt", "-q"]));
        assert!(processor.progress_manager().is_none());
    }

    // Tests export writes a PNG next to the input
    // Verified by disabling the export branch
    #[test]
    fn test_export_writes_image() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_sample(temp_dir.path(), "sample.txt");

        let mut processor =
            FileProcessor::new(create_test_cli(&[input.to_str().unwrap(), "-e", "-q"]));
        let reports = processor.run().unwrap();

        let expected = temp_dir.path().join("sample_image.png");
        assert_eq!(reports[0].exported.as_ref(), Some(&expected));
        assert!(expected.exists());
    }

    // Tests a custom marker file replaces the default shape
    // Verified by ignoring the marker argument
    #[test]
    fn test_custom_marker() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_sample(temp_dir.path(), "sample.txt");
        let marker = temp_dir.path().join("monster.pat");
        fs::write(
            &marker,
            "                  # \n#    ##    ##    ###\n #  #  #  #  #  #   \n",
        )
        .unwrap();

        let mut processor = FileProcessor::new(create_test_cli(&[
            input.to_str().unwrap(),
            "-m",
            marker.to_str().unwrap(),
            "-q",
        ]));
        let reports = processor.run().unwrap();
        assert_eq!(reports[0].roughness, 273);

        fs::write(&marker, "no set cells").unwrap();
        let mut rejected = FileProcessor::new(create_test_cli(&[
            input.to_str().unwrap(),
            "-m",
            marker.to_str().unwrap(),
            "-q",
        ]));
        assert!(rejected.run().is_err());
    }

    // Tests output filename generation with suffix
    // Verified by changing the output suffix
    #[test]
    fn test_output_path_generation() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("puzzles/day20.txt")),
            PathBuf::from("puzzles/day20_image.png")
        );
        assert_eq!(
            FileProcessor::get_output_path(Path::new("day20.txt")),
            PathBuf::from("day20_image.png")
        );
    }
}
