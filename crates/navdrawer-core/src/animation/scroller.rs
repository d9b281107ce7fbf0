#![forbid(unsafe_code)]

//! Timed scroll physics for settle and programmatic open/close runs.
//!
//! A [`ScrollPhysics`] owns at most one [`AnimationRun`]. Starting a new run
//! replaces the previous one outright (last call wins, nothing is queued), so
//! an in-flight animation is cancelled simply by being superseded.
//!
//! # Usage
//!
//! ```ignore
//! let mut physics = ScrollPhysics::new(Easing::AccelerateDecelerate);
//! physics.start(0.0, -240.0, Duration::from_millis(230), now);
//! // once per frame:
//! let (offset, finished) = physics.advance(frame_time);
//! ```
//!
//! # Invariants
//!
//! 1. Progress is `elapsed / duration` clamped to `[0.0, 1.0]` before easing.
//! 2. Once a run reports finished, every later `advance` returns
//!    `(to, true)` with `to` exactly equal to the run's end offset.
//! 3. A zero duration finishes on the first `advance`.
//! 4. `advance` with a timestamp earlier than the run start reports the
//!    start offset (elapsed saturates at zero).
//!
//! # Failure Modes
//!
//! - Non-finite start or end offsets are replaced by `0.0`.
//! - Calling `advance` before any run was started returns `(0.0, true)`.

use std::time::Duration;

use web_time::Instant;

use super::Easing;

/// One timed interpolation between two offsets.
///
/// Immutable once created; a new run is built for every start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    /// Offset at the start of the run.
    pub from: f32,
    /// Offset at the end of the run.
    pub to: f32,
    /// Timestamp of the start.
    pub started: Instant,
    /// Total length of the run.
    pub duration: Duration,
}

impl AnimationRun {
    /// Linear progress at `now`, in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// Whether the run has reached its end at `now`.
    #[must_use]
    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.duration.is_zero() || now.saturating_duration_since(self.started) >= self.duration
    }

    /// Signed distance covered by the run.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.to - self.from
    }
}

/// Deceleration/interpolation driver for a single offset.
#[derive(Debug, Clone)]
pub struct ScrollPhysics {
    easing: Easing,
    run: Option<AnimationRun>,
    current: f32,
    finished: bool,
}

impl Default for ScrollPhysics {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}

impl ScrollPhysics {
    /// Create an idle driver using `easing`.
    #[must_use]
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            run: None,
            current: 0.0,
            finished: true,
        }
    }

    /// Begin a run from `from` to `to` lasting `duration`, starting at `now`.
    ///
    /// Any run in flight is discarded.
    pub fn start(&mut self, from: f32, to: f32, duration: Duration, now: Instant) {
        let from = finite_or_zero(from);
        let to = finite_or_zero(to);
        self.run = Some(AnimationRun {
            from,
            to,
            started: now,
            duration,
        });
        self.current = from;
        self.finished = false;
    }

    /// Poll the run at `now`, returning `(offset, finished)`.
    pub fn advance(&mut self, now: Instant) -> (f32, bool) {
        if self.finished {
            return (self.current, true);
        }
        let Some(run) = self.run else {
            self.finished = true;
            return (self.current, true);
        };

        if run.is_complete_at(now) {
            self.current = run.to;
            self.finished = true;
        } else {
            let eased = self.easing.apply(run.progress(now));
            self.current = run.from + run.distance() * eased;
        }
        (self.current, self.finished)
    }

    /// Freeze at the last reported offset and mark the run finished.
    pub fn stop(&mut self) {
        self.finished = true;
    }

    /// Whether no run is in flight.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Offset reported by the last `start` or `advance`.
    #[inline]
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// End offset of the current run, if any.
    #[must_use]
    pub fn final_offset(&self) -> Option<f32> {
        self.run.map(|run| run.to)
    }

    /// The most recent run.
    #[must_use]
    pub fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Easing applied to future `advance` calls.
    #[inline]
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Replace the easing curve. Takes effect on the next `advance`.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}
