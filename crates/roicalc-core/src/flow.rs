//! Staged audit flow: `Input → Scanning → Results`.
//!
//! The scan is a timer-driven simulation. Three timer chains run while
//! scanning: the step index advances every `scan_duration / steps`, the
//! progress percentage advances by one every `progress_interval`, and once it
//! reaches 100 a settle timer moves the flow to `Results`. Each handler
//! reschedules from the timer's own due time, so results do not depend on how
//! often the host polls. `reset` cancels every pending timer.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, trace};

use crate::calculator::CalcError;
use crate::constants::{PROGRESS_INTERVAL, SCAN_DURATION, SCAN_STEPS, SETTLE_DELAY};
use crate::domain::extract_domain;
use crate::report::{derive_report, Report};
use crate::timer::{TimerHandle, TimerQueue};

/// Flow stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStage {
    Input,
    Scanning,
    Results,
}

/// Scan timing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimings {
    pub scan_duration: Duration,
    pub progress_interval: Duration,
    pub settle_delay: Duration,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            scan_duration: SCAN_DURATION,
            progress_interval: PROGRESS_INTERVAL,
            settle_delay: SETTLE_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowEvent {
    StepAdvance,
    ProgressTick,
    Settle,
}

/// Audit calculator state.
#[derive(Debug)]
pub struct AuditFlow {
    stage: FlowStage,
    input: String,
    domain: String,
    step: usize,
    progress: u8,
    report: Option<Report>,
    timings: FlowTimings,
    steps: &'static [&'static str],
    timers: TimerQueue<FlowEvent>,
    step_timer: Option<TimerHandle>,
}

impl Default for AuditFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::with_timings(FlowTimings::default())
    }

    #[must_use]
    pub fn with_timings(timings: FlowTimings) -> Self {
        Self {
            stage: FlowStage::Input,
            input: String::new(),
            domain: String::new(),
            step: 0,
            progress: 0,
            report: None,
            timings,
            steps: &SCAN_STEPS,
            timers: TimerQueue::new(),
            step_timer: None,
        }
    }

    /// Replace the input text. Ignored outside the `Input` stage.
    pub fn set_input(&mut self, text: &str) {
        if self.stage == FlowStage::Input {
            text.clone_into(&mut self.input);
        }
    }

    /// Append one character to the input. Ignored outside the `Input` stage.
    pub fn push_char(&mut self, c: char) {
        if self.stage == FlowStage::Input {
            self.input.push(c);
        }
    }

    /// Remove the last input character. Ignored outside the `Input` stage.
    pub fn pop_char(&mut self) {
        if self.stage == FlowStage::Input {
            self.input.pop();
        }
    }

    /// Whether `start` would be accepted.
    #[must_use]
    pub fn can_analyze(&self) -> bool {
        self.stage == FlowStage::Input && !self.input.trim().is_empty()
    }

    /// Set the input and start scanning.
    pub fn analyze(&mut self, input: &str, now: Duration) -> Result<&str, CalcError> {
        self.set_input(input);
        self.start(now)
    }

    /// Start scanning the current input. Returns the extracted domain.
    pub fn start(&mut self, now: Duration) -> Result<&str, CalcError> {
        if self.stage != FlowStage::Input {
            return Err(CalcError::FlowBusy);
        }
        if self.input.trim().is_empty() {
            return Err(CalcError::EmptyDomain);
        }
        let domain = extract_domain(&self.input);
        if domain.is_empty() {
            return Err(CalcError::EmptyDomain);
        }

        self.domain = domain;
        self.stage = FlowStage::Scanning;
        self.step = 0;
        self.progress = 0;
        self.report = None;
        self.timers.cancel_all();
        let step_due = now + self.step_interval();
        self.step_timer = (self.steps.len() > 1)
            .then(|| self.timers.schedule(step_due, FlowEvent::StepAdvance));
        self.timers
            .schedule(now + self.timings.progress_interval, FlowEvent::ProgressTick);

        debug!(domain = %self.domain, "scan started");
        Ok(&self.domain)
    }

    /// Fire every timer due at or before `now`. Returns whether the stage changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        let before = self.stage;
        while let Some((due, event)) = self.timers.pop_due(now) {
            trace!(?event, ?due, "flow timer fired");
            self.handle(event, due);
        }
        self.stage != before
    }

    fn handle(&mut self, event: FlowEvent, due: Duration) {
        match event {
            FlowEvent::StepAdvance => {
                self.step += 1;
                let step_due = due + self.step_interval();
                self.step_timer = (self.step + 1 < self.steps.len())
                    .then(|| self.timers.schedule(step_due, FlowEvent::StepAdvance));
            }
            FlowEvent::ProgressTick => {
                self.progress = (self.progress + 1).min(100);
                if self.progress < 100 {
                    self.timers
                        .schedule(due + self.timings.progress_interval, FlowEvent::ProgressTick);
                } else {
                    self.timers
                        .schedule(due + self.timings.settle_delay, FlowEvent::Settle);
                }
            }
            FlowEvent::Settle => {
                // Progress can outrun a slow step chain; stop it at the last step.
                if let Some(handle) = self.step_timer.take() {
                    self.timers.cancel(handle);
                }
                self.step = self.steps.len().saturating_sub(1);
                self.report = Some(derive_report(&self.domain));
                self.stage = FlowStage::Results;
                debug!(domain = %self.domain, "scan complete");
            }
        }
    }

    /// Return to `Input`, clearing text, progress, report and pending timers.
    pub fn reset(&mut self) {
        self.timers.cancel_all();
        self.step_timer = None;
        self.stage = FlowStage::Input;
        self.input.clear();
        self.domain.clear();
        self.step = 0;
        self.progress = 0;
        self.report = None;
        debug!("flow reset");
    }

    fn step_interval(&self) -> Duration {
        let steps = u32::try_from(self.steps.len().max(1)).unwrap_or(u32::MAX);
        self.timings.scan_duration / steps
    }

    #[must_use]
    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Domain being scanned or reported on; empty in `Input`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn steps(&self) -> &'static [&'static str] {
        self.steps
    }

    /// Label of the active scan step.
    #[must_use]
    pub fn step_label(&self) -> &'static str {
        self.steps.get(self.step).copied().unwrap_or_default()
    }

    /// Scan progress, 0 to 100.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Frozen report; present only in `Results`.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// When the next timer is due, if any.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    #[must_use]
    pub fn timings(&self) -> FlowTimings {
        self.timings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_in_input() {
        let flow = AuditFlow::new();
        assert_eq!(flow.stage(), FlowStage::Input);
        assert_eq!(flow.progress(), 0);
        assert!(flow.report().is_none());
        assert!(!flow.can_analyze());
    }

    #[test]
    fn empty_input_rejected() {
        let mut flow = AuditFlow::new();
        assert_eq!(flow.analyze("   ", ms(0)), Err(CalcError::EmptyDomain));
        assert_eq!(flow.stage(), FlowStage::Input);
        assert!(flow.next_wakeup().is_none());
    }

    #[test]
    fn scheme_only_input_rejected() {
        let mut flow = AuditFlow::new();
        assert_eq!(flow.analyze("https://", ms(0)), Err(CalcError::EmptyDomain));
        assert_eq!(flow.stage(), FlowStage::Input);
    }

    #[test]
    fn analyze_moves_to_scanning_immediately() {
        let mut flow = AuditFlow::new();
        assert_eq!(flow.analyze("https://www.airops.com/", ms(0)), Ok("airops.com"));
        assert_eq!(flow.stage(), FlowStage::Scanning);
        assert_eq!(flow.step_label(), SCAN_STEPS[0]);
    }

    #[test]
    fn second_start_is_busy() {
        let mut flow = AuditFlow::new();
        flow.analyze("airops.com", ms(0)).unwrap();
        assert_eq!(flow.start(ms(10)), Err(CalcError::FlowBusy));
    }

    #[test]
    fn input_locked_while_scanning() {
        let mut flow = AuditFlow::new();
        flow.analyze("airops.com", ms(0)).unwrap();
        flow.push_char('x');
        flow.set_input("other.com");
        assert_eq!(flow.input(), "airops.com");
    }

    #[test]
    fn progress_and_steps_follow_schedule() {
        let mut flow = AuditFlow::new();
        flow.analyze("airops.com", ms(0)).unwrap();

        flow.advance(ms(399));
        assert_eq!(flow.progress(), 9);
        assert_eq!(flow.step(), 0);

        flow.advance(ms(800));
        assert_eq!(flow.progress(), 20);
        assert_eq!(flow.step(), 1);

        flow.advance(ms(3_200));
        assert_eq!(flow.step(), 4);
        assert_eq!(flow.stage(), FlowStage::Scanning);
    }

    #[test]
    fn results_only_after_full_progress_and_settle() {
        let mut flow = AuditFlow::new();
        flow.analyze("airops.com", ms(0)).unwrap();

        assert!(!flow.advance(ms(4_000)));
        assert_eq!(flow.progress(), 100);
        assert_eq!(flow.stage(), FlowStage::Scanning);

        assert!(!flow.advance(ms(4_399)));
        assert!(flow.advance(ms(4_400)));
        assert_eq!(flow.stage(), FlowStage::Results);
        assert_eq!(flow.report(), Some(&derive_report("airops.com")));
        assert!(flow.next_wakeup().is_none());
    }

    #[test]
    fn coarse_polling_matches_fine_polling() {
        let mut coarse = AuditFlow::new();
        coarse.analyze("example.com", ms(0)).unwrap();
        coarse.advance(ms(10_000));

        let mut fine = AuditFlow::new();
        fine.analyze("example.com", ms(0)).unwrap();
        let mut t = 0;
        while fine.stage() == FlowStage::Scanning {
            t += 7;
            fine.advance(ms(t));
        }
        assert_eq!(coarse.stage(), FlowStage::Results);
        assert_eq!(coarse.report(), fine.report());
    }

    #[test]
    fn reset_clears_everything() {
        let mut flow = AuditFlow::new();
        flow.analyze("airops.com", ms(0)).unwrap();
        flow.advance(ms(5_000));
        assert_eq!(flow.stage(), FlowStage::Results);

        flow.reset();
        assert_eq!(flow.stage(), FlowStage::Input);
        assert_eq!(flow.progress(), 0);
        assert_eq!(flow.step(), 0);
        assert_eq!(flow.domain(), "");
        assert_eq!(flow.input(), "");
        assert!(flow.report().is_none());
    }

    #[test]
    fn reset_mid_scan_cancels_timers() {
        let mut flow = AuditFlow::new();
        flow.analyze("airops.com", ms(0)).unwrap();
        flow.advance(ms(1_000));
        flow.reset();
        assert!(flow.next_wakeup().is_none());
        assert!(!flow.advance(ms(10_000)));
        assert_eq!(flow.stage(), FlowStage::Input);
        assert_eq!(flow.progress(), 0);
    }

    #[test]
    fn restart_after_reset_uses_new_clock() {
        let mut flow = AuditFlow::new();
        flow.analyze("airops.com", ms(0)).unwrap();
        flow.advance(ms(2_000));
        flow.reset();

        flow.analyze("example.com", ms(20_000)).unwrap();
        flow.advance(ms(20_040));
        assert_eq!(flow.progress(), 1);
        flow.advance(ms(24_400));
        assert_eq!(flow.report().map(|r| r.domain.as_str()), Some("example.com"));
    }

    #[test]
    fn custom_timings() {
        let timings = FlowTimings {
            scan_duration: ms(500),
            progress_interval: ms(5),
            settle_delay: ms(0),
        };
        let mut flow = AuditFlow::with_timings(timings);
        flow.analyze("a.io", ms(0)).unwrap();
        flow.advance(ms(500));
        assert_eq!(flow.stage(), FlowStage::Results);
    }

    #[test]
    fn settle_stops_slow_step_chain() {
        let timings = FlowTimings {
            scan_duration: ms(10_000),
            progress_interval: ms(5),
            settle_delay: ms(0),
        };
        let mut flow = AuditFlow::with_timings(timings);
        flow.analyze("a.io", ms(0)).unwrap();
        assert!(flow.advance(ms(500)));
        assert_eq!(flow.stage(), FlowStage::Results);
        assert_eq!(flow.step(), flow.steps().len() - 1);
        assert!(flow.next_wakeup().is_none());
    }

    #[test]
    fn typing_edits_input() {
        let mut flow = AuditFlow::new();
        for c in "ab.cx".chars() {
            flow.push_char(c);
        }
        flow.pop_char();
        assert_eq!(flow.input(), "ab.c");
        assert!(flow.can_analyze());
    }
}
