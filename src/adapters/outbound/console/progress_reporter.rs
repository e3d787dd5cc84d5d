use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::cell::RefCell;

const PROGRESS_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Everything goes to stderr so the report on stdout stays clean. Matching
/// progress is drawn with an indicatif bar; warnings are colored when stderr
/// is a terminal. In quiet mode only warnings and errors are printed.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: false,
        }
    }

    /// A reporter that keeps warnings and errors but drops progress output.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(pb) = slot.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        *slot = Some(pb.clone());
        pb
    }

    fn finish_progress(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish_progress();
        }
    }

    fn report_warning(&self, message: &str) {
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.suspend(|| {
                eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.yellow()))
            });
            return;
        }
        eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.yellow()));
    }

    fn report_error(&self, message: &str) {
        self.finish_progress();
        eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.red()));
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress();
        if !self.quiet {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Loading");
        reporter.report_progress(1, 2, Some("cluster-logging"));
        reporter.report_warning("⚠️  Warning: test");
        reporter.report_progress(2, 2, None);
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_completion("done");
    }

    #[test]
    fn test_quiet_reporter_never_creates_progress_bar() {
        let reporter = StderrProgressReporter::quiet();
        reporter.report_progress(1, 5, Some("op"));
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_warning("still printed");
        reporter.report_error("error");
    }
}
