//! CLI entry point for tile assembly and marker search

use clap::Parser;
use tileseam::io::cli::{Cli, FileProcessor};

fn main() -> tileseam::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
