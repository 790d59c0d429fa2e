//! Command implementations behind the `jit` subcommands

pub mod checkout;
pub mod pull;
pub mod status;

use indicatif::ProgressBar;
use std::time::Instant;

use crate::core::{
    create_footer_progress_bar, print_above, start_footer, JobReport, RunStatistics,
    DIRTY_REPOS_MESSAGE,
};
use crate::git::Status;
use crate::Error;

/// Prints the dirty-precondition listing
pub(crate) fn print_dirty_repositories(repositories: &[String]) {
    println!("{DIRTY_REPOS_MESSAGE}");
    for line in repositories {
        println!("{line}");
    }
}

/// Short failure reason for a report
pub(crate) fn failure_detail(error: &Error) -> String {
    match error {
        Error::Git { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

/// Prints job reports as they arrive and keeps the run statistics
pub(crate) struct Reporter {
    footer: ProgressBar,
    stats: RunStatistics,
    start_time: Instant,
}

impl Reporter {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            footer: create_footer_progress_bar(message),
            stats: RunStatistics::new(),
            start_time: Instant::now(),
        }
    }

    pub(crate) fn start(&self, total: usize) {
        start_footer(&self.footer, total);
    }

    /// Prints the single line for one repository
    pub(crate) fn report(&self, report: &JobReport) {
        print_above(&self.footer, &report.line);
        self.stats.update(&report.status);
        self.footer.inc(1);
    }

    /// Summary line for the run, or nothing when no job ran
    pub(crate) fn summary(&self, success: Status) -> Option<String> {
        (self.stats.total() > 0)
            .then(|| self.stats.generate_summary(success, self.start_time.elapsed()))
    }

    /// Clears the footer and prints the summary line
    pub(crate) fn finish(self, success: Status) {
        self.footer.finish_and_clear();
        if let Some(summary) = self.summary(success) {
            println!("{summary}");
        }
    }

    /// Clears the footer of a run that never started
    pub(crate) fn abandon(self) {
        self.footer.finish_and_clear();
    }
}
