//! Spinner feedback for long-running solves

use crate::algorithm::solver::SolveStats;
use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Displays solver progress on stderr
pub struct SolveProgress {
    spinner: ProgressBar,
}

impl SolveProgress {
    /// Start a spinner labelled with the board size
    pub fn start(height: usize, width: usize) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_message(format!("Solving {height}x{width} board"));
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { spinner }
    }

    /// Show the latest solver counters
    pub fn update(&self, stats: &SolveStats) {
        self.spinner.set_message(format!(
            "{} steps, {} cache hits, {} rectangles",
            stats.steps, stats.cache.hits, stats.rectangle_shortcuts
        ));
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}
