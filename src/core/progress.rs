//! Progress footer for concurrent runs

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::config::{PROGRESS_TEMPLATE, PROGRESS_TICK_CHARS};

const TICK_INTERVAL_MS: u64 = 120;

/// Creates a progress style configuration for the footer spinner
pub(crate) fn create_progress_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(PROGRESS_TICK_CHARS)
}

/// Creates the footer shown while jobs are in flight. It stays idle until
/// [`start_footer`] gives it a length.
///
/// indicatif draws to stderr and hides the bar when stderr is not a
/// terminal, so redirected output only carries the report lines.
pub fn create_footer_progress_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(create_progress_style());
    pb.set_message(message.to_string());
    pb
}

/// Sets the number of jobs and starts the spinner
pub fn start_footer(pb: &ProgressBar, total: usize) {
    pb.set_length(total as u64);
    pb.enable_steady_tick(Duration::from_millis(TICK_INTERVAL_MS));
}

/// Prints a report line above the footer without tearing it
pub fn print_above(pb: &ProgressBar, line: &str) {
    pb.suspend(|| println!("{line}"));
}
