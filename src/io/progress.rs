//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Per-file display state
#[derive(Debug, Clone, Default)]
struct FileState {
    name: String,
    placed: usize,
    total: usize,
    stage: &'static str,
}

/// Coordinates progress display for batch assembly
///
/// Shows one bar per recently active file tracking placed tiles against the
/// tile count, and adds a batch bar when more files are queued than fit on
/// screen.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_states: Vec<FileState>,
    finished: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
            finished: false,
        }
    }

    /// Create a manager whose bars are never drawn
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden()),
            ..Self::new()
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(PLACEMENT_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress for a new file with `tile_count` tiles to place
    pub fn start_file(&mut self, index: usize, path: &Path, tile_count: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileState {
                name,
                placed: 0,
                total: tile_count,
                stage: "placing",
            };
        }
        self.update_bars();
    }

    /// Report the number of tiles placed so far
    pub fn update_placements(&mut self, index: usize, placed: usize) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.placed = placed;
        }
        self.update_bars();
    }

    /// Report the current pipeline stage of a file
    pub fn set_stage(&mut self, index: usize, stage: &'static str) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.stage = stage;
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.placed = state.total;
            state.stage = "done";
        }
        self.update_bars();
        log::debug!("file {index} finished in {elapsed:?}");
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        self.finished = true;
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Whether the displays have been cleaned up
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of per-file bars in use
    pub fn file_bar_count(&self) -> usize {
        self.file_bars.len()
    }

    /// Whether a batch bar was created
    pub const fn has_batch_bar(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Current `(placed, total)` for a file
    pub fn file_progress(&self, index: usize) -> Option<(usize, usize)> {
        self.file_states
            .get(index)
            .map(|state| (state.placed, state.total))
    }

    /// Update all progress bars to show the last N active files
    fn update_bars(&self) {
        let active: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_idx, state) in visible.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(state.total as u64);
                bar.set_position(state.placed as u64);
                let width = state.total.to_string().len();
                bar.set_message(format!(
                    "{:>width$}/{} tiles {}",
                    state.placed, state.total, state.stage
                ));
                bar.set_prefix(state.name.clone());
            }
        }

        for bar_idx in visible.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
