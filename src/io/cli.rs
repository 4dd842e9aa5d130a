//! Command-line interface for batch assembly of puzzle files

use crate::algorithm::assembly::Assembly;
use crate::algorithm::catalog::TileCatalog;
use crate::algorithm::placement::PlacementSolver;
use crate::analysis::markers::{MarkerShape, search};
use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::input::{puzzle_files, read_tiles};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tileseam")]
#[command(
    author,
    version,
    about = "Reassemble shuffled image tiles and search the result for marker shapes"
)]
/// Command-line arguments for the assembly tool
pub struct Cli {
    /// Puzzle text file or directory of puzzle files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Marker pattern file (`#` cells required); defaults to the sea monster
    #[arg(short, long, value_name = "FILE")]
    pub marker: Option<PathBuf>,

    /// Export the composed image with markers highlighted as PNG
    #[arg(short, long)]
    pub export: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Answers computed for one puzzle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Puzzle file the answers belong to
    pub path: PathBuf,
    /// Product of the four corner tile identifiers
    pub corner_product: u64,
    /// Set pixels not covered by markers
    pub roughness: usize,
    /// Number of marker occurrences
    pub markers: usize,
    /// Exported image, when export was requested
    pub exported: Option<PathBuf>,
}

/// Orchestrates batch processing of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments, printing one line per file
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, marker loading or any file fails
    // Allow print for the computed answers
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        let reports = self.run()?;
        for report in &reports {
            println!(
                "{}: corners={} roughness={} markers={}",
                report.path.display(),
                report.corner_product,
                report.roughness,
                report.markers
            );
        }
        Ok(())
    }

    /// Process files according to CLI arguments and return their reports
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, marker loading or any file fails
    pub fn run(&mut self) -> Result<Vec<FileReport>> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(Vec::new());
        }
        let shape = self.load_marker()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let reports = files
            .iter()
            .enumerate()
            .map(|(index, file)| self.process_file(file, index, &shape))
            .collect::<Result<Vec<_>>>();

        // Bars are cleared whether or not every file succeeded
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        reports
    }

    /// Progress display, absent in quiet mode
    pub const fn progress_manager(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn load_marker(&self) -> Result<MarkerShape> {
        match &self.cli.marker {
            Some(path) => {
                let pattern =
                    std::fs::read_to_string(path).map_err(|e| AlgorithmError::FileSystem {
                        path: path.clone(),
                        operation: "read marker",
                        source: e,
                    })?;
                MarkerShape::from_pattern(&pattern)
            }
            None => Ok(MarkerShape::sea_monster()),
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            puzzle_files(target)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a puzzle file or directory",
            ))
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        shape: &MarkerShape,
    ) -> Result<FileReport> {
        let start_time = Instant::now();
        let catalog = TileCatalog::build(read_tiles(input_path)?)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, catalog.len());
        }

        let mut solver = PlacementSolver::new(&catalog)?;
        loop {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_placements(index, solver.placement_map().len());
            }
            if !solver.step_pass()? {
                break;
            }
        }
        let placements = solver.finish()?;

        let assembly = Assembly::from_parts(catalog, placements)?;
        let corner_product = assembly.corner_product()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.set_stage(index, "searching");
        }
        let report = search(&assembly.compose()?, shape)?;

        let exported = if self.cli.export {
            let output_path = Self::get_output_path(input_path);
            let mask = report.marker_mask(shape);
            export_grid_as_png(
                &report.image,
                Some(&mask),
                output_path
                    .to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid output path"))?,
            )?;
            Some(output_path)
        } else {
            None
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(FileReport {
            path: input_path.to_path_buf(),
            corner_product,
            roughness: report.roughness,
            markers: report.hits(),
            exported,
        })
    }

    /// Path of the exported image for an input file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
