//! Eased numeric transitions driven by caller-provided frame ticks.
//!
//! An [`AnimatedValue`] tracks one displayed number. Each target change
//! starts a new run from whatever is currently displayed and hands back a
//! [`FrameRequest`]. The host passes the request to [`AnimatedValue::tick`]
//! on the next frame and keeps going while `tick` returns another request.
//! A new target bumps the generation, so requests from a superseded run are
//! ignored and two tick chains never interleave on the same value.
//!
//! Time is a monotonic `Duration` since any origin the host chooses.

use std::time::Duration;

use tracing::trace;

/// Cubic ease-out: `1 - (1 - p)^3`, with `p` clamped to `[0, 1]`.
#[inline]
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Handle for the next frame of one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    from: f64,
    to: f64,
    started_at: Duration,
}

/// A displayed value easing toward its target.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    target: f64,
    previous_target: f64,
    displayed: f64,
    duration: Duration,
    run: Option<Run>,
    generation: u64,
}

impl AnimatedValue {
    /// Create a value already at rest on `initial`.
    #[must_use]
    pub fn new(initial: f64, duration: Duration) -> Self {
        Self {
            target: initial,
            previous_target: initial,
            displayed: initial,
            duration,
            run: None,
            generation: 0,
        }
    }

    /// Retarget, restarting from the currently displayed value.
    ///
    /// Returns `None` when `target` equals the current target. Any request
    /// issued before this call becomes stale.
    #[allow(clippy::float_cmp)]
    pub fn set_target(&mut self, target: f64, now: Duration) -> Option<FrameRequest> {
        if target == self.target {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.previous_target = self.target;
        self.target = target;
        self.run = Some(Run {
            from: self.displayed,
            to: target,
            started_at: now,
        });
        trace!(
            from = self.displayed,
            to = target,
            generation = self.generation,
            "animation restarted"
        );
        Some(FrameRequest {
            generation: self.generation,
        })
    }

    /// Advance the run for `request` to `now`.
    ///
    /// Returns the request for the following frame while the run is still
    /// in progress. Stale requests and idle values return `None` without
    /// touching the displayed value.
    pub fn tick(&mut self, request: FrameRequest, now: Duration) -> Option<FrameRequest> {
        if request.generation != self.generation {
            return None;
        }
        let run = self.run?;
        let progress = self.progress_of(&run, now);
        if progress >= 1.0 {
            self.displayed = run.to;
            self.run = None;
            return None;
        }
        self.displayed = run.from + (run.to - run.from) * ease_out_cubic(progress);
        Some(request)
    }

    /// Jump straight to the target and invalidate outstanding requests.
    pub fn settle(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.displayed = self.target;
        self.run = None;
    }

    /// Linear progress of the active run at `now`, or 1.0 when idle.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        self.run.as_ref().map_or(1.0, |run| self.progress_of(run, now))
    }

    fn progress_of(&self, run: &Run, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(run.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Value to render this frame.
    #[must_use]
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Displayed value rounded half away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded(&self) -> i64 {
        self.displayed.round() as i64
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn previous_target(&self) -> f64 {
        self.previous_target
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }
}

/// An [`AnimatedValue`] paired with its pending frame request.
///
/// Hosts that redraw on a fixed cadence call [`retarget`](Self::retarget)
/// when the tracked metric changes and [`on_frame`](Self::on_frame) once per
/// frame.
#[derive(Debug, Clone)]
pub struct AnimatedDisplay {
    value: AnimatedValue,
    pending: Option<FrameRequest>,
}

impl AnimatedDisplay {
    #[must_use]
    pub fn new(initial: f64, duration: Duration) -> Self {
        Self {
            value: AnimatedValue::new(initial, duration),
            pending: None,
        }
    }

    /// Point at a new target; replaces any pending frame request.
    pub fn retarget(&mut self, target: f64, now: Duration) {
        if let Some(request) = self.value.set_target(target, now) {
            self.pending = Some(request);
        }
    }

    /// Show `target` immediately, dropping any run in flight.
    pub fn jump_to(&mut self, target: f64, now: Duration) {
        self.value.set_target(target, now);
        self.value.settle();
        self.pending = None;
    }

    /// Run one frame. Returns whether another frame is wanted.
    pub fn on_frame(&mut self, now: Duration) -> bool {
        self.pending = self
            .pending
            .and_then(|request| self.value.tick(request, now));
        self.pending.is_some()
    }

    #[must_use]
    pub fn value(&self) -> &AnimatedValue {
        &self.value
    }

    #[must_use]
    pub fn displayed(&self) -> f64 {
        self.value.displayed()
    }

    #[must_use]
    pub fn rounded(&self) -> i64 {
        self.value.rounded()
    }
}
