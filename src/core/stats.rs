//! Statistics tracking for concurrent repository operations

use crate::core::config::{ERROR_MESSAGE_MAX_LENGTH, ERROR_MESSAGE_TRUNCATE_LENGTH};
use crate::git::Status;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Statistics for one fan-out run
///
/// Counters are atomic so workers can record outcomes concurrently.
#[derive(Debug, Default)]
pub struct RunStatistics {
    pub succeeded: AtomicU64,
    pub failed: AtomicU64,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one job outcome
    pub fn update(&self, status: &Status) {
        if status.is_failure() {
            self.failed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.succeeded.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn total(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed) + self.failed.load(Ordering::Relaxed)
    }

    /// One-line summary, e.g. `✅ Completed in 1.2s • 12 pulled • 3 failed`.
    ///
    /// Counts only; the per-repository lines already named every repository.
    pub fn generate_summary(&self, success: Status, duration: Duration) -> String {
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);
        let mut summary = format!(
            "✅ Completed in {:.1}s • {} {}",
            duration.as_secs_f64(),
            succeeded,
            success.text()
        );
        if failed > 0 {
            summary.push_str(&format!(" • {failed} failed"));
        }
        summary
    }
}

/// Cleans and formats git error output for display
pub(crate) fn clean_error_message(error: &str) -> String {
    // Collapse newlines, tabs and repeated whitespace
    let cleaned = error.split_whitespace().collect::<Vec<_>>().join(" ");
    let lower = cleaned.to_lowercase();

    if lower.contains("authentication") || lower.contains("permission denied") {
        "authentication failed".to_string()
    } else if lower.contains("conflict") || lower.contains("diverg") {
        "merge conflict".to_string()
    } else if lower.contains("could not resolve host") || lower.contains("connection") {
        "network error".to_string()
    } else if lower.contains("did not specify a branch") || lower.contains("no tracking information") {
        "no upstream".to_string()
    } else if cleaned.chars().count() > ERROR_MESSAGE_MAX_LENGTH {
        let truncated: String = cleaned.chars().take(ERROR_MESSAGE_TRUNCATE_LENGTH).collect();
        format!("{truncated}...")
    } else {
        cleaned
    }
}
