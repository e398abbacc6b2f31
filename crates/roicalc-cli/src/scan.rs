//! Drives the audit flow against the wall clock for the CLI.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use roicalc_core::calculator::CalcError;
use roicalc_core::flow::{AuditFlow, FlowStage, FlowTimings};
use roicalc_core::report::Report;

/// Longest sleep between flow polls, bounding Ctrl+C latency.
const MAX_POLL: Duration = Duration::from_millis(50);

/// Scan failure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScanError {
    #[error(transparent)]
    Rejected(#[from] CalcError),

    #[error("scan cancelled")]
    Cancelled,
}

/// Shared cancellation flag, set from the Ctrl+C handler.
///
/// # Example
/// ```
/// use roicalc_cli::scan::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Runs one audit scan to completion.
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    timings: FlowTimings,
    show_progress: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            timings: FlowTimings::default(),
            show_progress: true,
        }
    }
}

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timings(mut self, timings: FlowTimings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Scan in real time, redrawing a progress bar as the flow's timers fire.
    pub fn run(&self, input: &str, cancel: &CancellationToken) -> Result<Report, ScanError> {
        let mut flow = AuditFlow::with_timings(self.timings);
        let start = Instant::now();
        let domain = flow.analyze(input, Duration::ZERO)?.to_string();
        let bar = if self.show_progress {
            progress_bar(&domain)
        } else {
            ProgressBar::hidden()
        };

        while flow.stage() == FlowStage::Scanning {
            if cancel.is_cancelled() {
                flow.reset();
                bar.abandon_with_message("cancelled");
                debug!(%domain, "scan cancelled");
                return Err(ScanError::Cancelled);
            }
            flow.advance(start.elapsed());
            bar.set_position(u64::from(flow.progress()));
            bar.set_message(format!(
                "[{}/{}] {}",
                flow.step() + 1,
                flow.steps().len(),
                flow.step_label()
            ));
            let wait = flow.next_wakeup().map_or(MAX_POLL, |due| {
                due.saturating_sub(start.elapsed()).min(MAX_POLL)
            });
            thread::sleep(wait);
        }

        bar.finish_and_clear();
        take_report(&flow)
    }

    /// Scan on a virtual clock, firing every timer back to back.
    pub fn run_instant(&self, input: &str) -> Result<Report, ScanError> {
        let mut flow = AuditFlow::with_timings(self.timings);
        flow.analyze(input, Duration::ZERO)?;
        while let Some(due) = flow.next_wakeup() {
            flow.advance(due);
        }
        take_report(&flow)
    }
}

fn take_report(flow: &AuditFlow) -> Result<Report, ScanError> {
    flow.report().cloned().ok_or(ScanError::Cancelled)
}

fn progress_bar(domain: &str) -> ProgressBar {
    let bar = ProgressBar::new(100);
    let style = ProgressStyle::with_template("{prefix:.bold} [{bar:30.cyan/blue}] {pos:>3}% {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar.set_prefix(format!("Scanning {domain}"));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use roicalc_core::report::derive_report;

    fn fast() -> FlowTimings {
        FlowTimings {
            scan_duration: Duration::from_millis(50),
            progress_interval: Duration::from_millis(1),
            settle_delay: Duration::from_millis(5),
        }
    }

    #[test]
    fn instant_scan_matches_derivation() {
        let report = Scanner::new().run_instant("https://www.AirOps.com/blog").unwrap();
        assert_eq!(report, derive_report("airops.com"));
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(
            Scanner::new().run_instant("   "),
            Err(ScanError::Rejected(CalcError::EmptyDomain))
        );
        assert_eq!(
            Scanner::new().run_instant("https://"),
            Err(ScanError::Rejected(CalcError::EmptyDomain))
        );
    }

    #[test]
    fn live_scan_with_short_timings() {
        let cancel = CancellationToken::new();
        let report = Scanner::new()
            .timings(fast())
            .show_progress(false)
            .run("example.com", &cancel)
            .unwrap();
        assert_eq!(report, derive_report("example.com"));
    }

    #[test]
    fn cancelled_before_first_poll() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = Scanner::new()
            .show_progress(false)
            .run("example.com", &cancel);
        assert_eq!(result, Err(ScanError::Cancelled));
    }

    #[test]
    fn token_clones_share_state() {
        let a = CancellationToken::new();
        let b = a.clone();
        assert!(!b.is_cancelled());
        a.cancel();
        assert!(b.is_cancelled());
    }
}
