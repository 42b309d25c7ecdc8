use crate::ports::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes progress information to stderr so it doesn't interfere with the
/// JSON emitted on stdout.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// SilentProgressReporter adapter that drops every message; used by
/// embedders and tests that want no console output.
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}
