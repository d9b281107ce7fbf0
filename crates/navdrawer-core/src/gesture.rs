#![forbid(unsafe_code)]

//! Drag and tap recognition for the drawer.
//!
//! [`DragRecognizer`] turns the raw pointer stream into live offset updates
//! and, on release, a [`Settle`] decision. Left and right panels share one
//! recognizer: everything side-specific (sign, bound, drag zone, midpoint)
//! lives in the [`Track`] the caller passes in.
//!
//! # State Machine
//!
//! - **Down** creates a [`GestureSession`] and decides whether it is
//!   draggable. With no track (drawer resting closed) every position is
//!   draggable; with a track the pointer must start inside the drag zone.
//! - **Move** on a non-draggable session returns [`DragMove::Ignored`] so the
//!   host can let the event fall through to the content underneath.
//!   Otherwise the offset follows the finger 1:1 and is clamped.
//! - **Up** on a draggable session produces a [`Settle`] toward the open or
//!   closed bound, chosen by the opening intent.
//!
//! # Invariants
//!
//! 1. Every offset returned by `pointer_move` lies in the track's clamp
//!    range, or is `0.0` while the session has no track.
//! 2. Opening intent follows the sign of the last motion, except that a
//!    motion smaller than the noise threshold defers to the midpoint rule.
//! 3. A session resolves its track at most once.
//! 4. After `pointer_up`, `pointer_cancel`, or `reset()` there is no session.
//!
//! # Failure Modes
//!
//! - Move or Up without a prior Down is ignored (`Ignored` / `None`).
//! - A track with zero extent clamps every offset to `0.0`, so "open" and
//!   "closed" coincide.

use std::time::Duration;

use web_time::Instant;

#[cfg(feature = "tracing")]
use crate::logging::trace;
use crate::side::PanelSide;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Default motion (px) below which intent falls back to the midpoint rule.
pub const DEFAULT_NOISE_THRESHOLD: f32 = 3.0;

/// Default maximum movement (px, per axis) for a down/up pair to be a tap.
pub const DEFAULT_TAP_SLOP: f32 = 3.0;

/// Default maximum press duration for a tap.
pub const DEFAULT_TAP_TIMEOUT: Duration = Duration::from_millis(500);

/// Thresholds for drag recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragConfig {
    /// Motion (px) below which intent is inferred from the midpoint (default: 3).
    pub noise_threshold: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
        }
    }
}

// ---------------------------------------------------------------------------
// Track
// ---------------------------------------------------------------------------

/// Geometry of one side as seen by the recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Which panel this track drives.
    pub side: PanelSide,
    /// Panel width; the open offset is `side.sign() * extent`.
    pub extent: f32,
    /// Width of the content surface; `0.0` when unknown.
    pub viewport: f32,
}

impl Track {
    /// Create a track. Negative or non-finite sizes become `0.0`.
    #[must_use]
    pub fn new(side: PanelSide, extent: f32, viewport: f32) -> Self {
        Self {
            side,
            extent: non_negative(extent),
            viewport: non_negative(viewport),
        }
    }

    /// Offset when this side is fully open.
    #[inline]
    #[must_use]
    pub fn open_offset(&self) -> f32 {
        self.side.sign() * self.extent
    }

    /// Clamp `offset` into `[-extent, 0]` (left) or `[0, extent]` (right).
    #[must_use]
    pub fn clamp(&self, offset: f32) -> f32 {
        let open = self.open_offset();
        let (lo, hi) = if open < 0.0 { (open, 0.0) } else { (0.0, open) };
        if offset.is_nan() {
            0.0
        } else {
            offset.clamp(lo, hi)
        }
    }

    /// Whether a pointer-down at `x` may start a drag at the given offset.
    ///
    /// The zone is the part of the content surface still on screen: right of
    /// its left edge for the left panel, left of its right edge for the right
    /// panel.
    #[must_use]
    pub fn drag_zone_contains(&self, x: f32, offset: f32) -> bool {
        match self.side {
            PanelSide::Left => -offset < x,
            PanelSide::Right => self.viewport <= 0.0 || x < self.viewport - offset,
        }
    }

    /// Whether `offset` has passed half of the panel width.
    #[must_use]
    pub fn past_midpoint(&self, offset: f32) -> bool {
        self.extent / 2.0 < self.side.sign() * offset
    }

    /// Whether a finger moving from `last_x` to `x` opens this side.
    #[must_use]
    pub fn is_opening_motion(&self, last_x: f32, x: f32) -> bool {
        match self.side {
            PanelSide::Left => last_x < x,
            PanelSide::Right => x < last_x,
        }
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

// ---------------------------------------------------------------------------
// Session and outputs
// ---------------------------------------------------------------------------

/// State of one pointer-down → up interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Last seen pointer X.
    pub last_x: f32,
    /// Whether the gesture started inside the drag zone.
    pub draggable: bool,
    /// Whether the finger is currently heading toward "open".
    pub opening: bool,
    /// Resolved side geometry, `None` until the first decisive motion.
    pub track: Option<Track>,
}

/// Result of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMove {
    /// Not a drawer drag; let the event fall through.
    Ignored,
    /// The offset should follow the finger.
    Tracked {
        /// New clamped offset.
        offset: f32,
        /// Side being dragged, if resolved.
        track: Option<Track>,
    },
}

/// Where a released drag should come to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    /// Side the drag operated on, if one was resolved.
    pub side: Option<PanelSide>,
    /// Target offset: the open bound or `0.0`.
    pub target: f32,
    /// Whether the target is the open bound.
    pub opening: bool,
}

impl Settle {
    fn from_session(session: &GestureSession) -> Self {
        match session.track {
            Some(track) if session.opening => Self {
                side: Some(track.side),
                target: track.open_offset(),
                opening: true,
            },
            Some(track) => Self {
                side: Some(track.side),
                target: 0.0,
                opening: false,
            },
            None => Self {
                side: None,
                target: 0.0,
                opening: false,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// DragRecognizer
// ---------------------------------------------------------------------------

/// Tracks a single finger dragging the drawer content.
#[derive(Debug, Clone, Default)]
pub struct DragRecognizer {
    config: DragConfig,
    session: Option<GestureSession>,
}

impl DragRecognizer {
    /// Create a recognizer with the given configuration.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Start a session at `x`.
    ///
    /// `track` is the side currently exposed, or `None` when the drawer rests
    /// closed and the side is decided by the first motion.
    pub fn pointer_down(&mut self, x: f32, offset: f32, track: Option<Track>) {
        let (draggable, opening) = match track {
            Some(track) => (
                track.drag_zone_contains(x, offset),
                track.past_midpoint(offset),
            ),
            None => (true, false),
        };
        self.session = Some(GestureSession {
            last_x: x,
            draggable,
            opening,
            track,
        });
    }

    /// Feed a move to `x`.
    ///
    /// `resolve` is asked for a track, with the raw delta `last_x - x`, on the
    /// first non-zero motion of a session that has none yet. A negative delta
    /// (finger moving right) asks for the left side.
    pub fn pointer_move<F>(&mut self, x: f32, offset: f32, resolve: F) -> DragMove
    where
        F: FnOnce(f32) -> Option<Track>,
    {
        let noise_threshold = self.config.noise_threshold;
        let Some(session) = self.session.as_mut() else {
            return DragMove::Ignored;
        };
        if !session.draggable {
            return DragMove::Ignored;
        }

        let delta = session.last_x - x;
        if session.track.is_none() && delta != 0.0 {
            session.track = resolve(delta);
        }

        let Some(track) = session.track else {
            session.last_x = x;
            return DragMove::Tracked {
                offset: 0.0,
                track: None,
            };
        };

        session.opening = if delta.abs() < noise_threshold {
            track.past_midpoint(offset)
        } else {
            track.is_opening_motion(session.last_x, x)
        };
        session.last_x = x;

        let next = track.clamp(offset + delta);

        #[cfg(feature = "tracing")]
        trace!(
            side = %track.side,
            delta,
            offset = next,
            opening = session.opening,
            "drag tracked"
        );

        DragMove::Tracked {
            offset: next,
            track: Some(track),
        }
    }

    /// End the session. Returns the settle decision for a draggable session.
    pub fn pointer_up(&mut self) -> Option<Settle> {
        let session = self.session.take()?;
        session.draggable.then(|| Settle::from_session(&session))
    }

    /// Abort the session, settling by the midpoint rule.
    pub fn pointer_cancel(&mut self, offset: f32) -> Option<Settle> {
        let mut session = self.session.take()?;
        if !session.draggable {
            return None;
        }
        session.opening = session
            .track
            .is_some_and(|track| track.past_midpoint(offset));
        Some(Settle::from_session(&session))
    }

    /// Drop any session without producing a settle.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// The live session, if any.
    #[inline]
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Whether a draggable session is live.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.draggable)
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// TapDetector
// ---------------------------------------------------------------------------

/// Recognizes a down/up pair that barely moved as a tap.
#[derive(Debug, Clone)]
pub struct TapDetector {
    slop: f32,
    timeout: Option<Duration>,
    down: Option<(f32, f32, Instant)>,
}

impl Default for TapDetector {
    fn default() -> Self {
        Self::new(DEFAULT_TAP_SLOP, Some(DEFAULT_TAP_TIMEOUT))
    }
}

impl TapDetector {
    /// Create a detector. `timeout = None` accepts presses of any length.
    #[must_use]
    pub fn new(slop: f32, timeout: Option<Duration>) -> Self {
        Self {
            slop: non_negative(slop),
            timeout,
            down: None,
        }
    }

    /// Record a pointer-down.
    pub fn down(&mut self, x: f32, y: f32, now: Instant) {
        self.down = Some((x, y, now));
    }

    /// Record a pointer-up; `true` if it completes a tap.
    pub fn up(&mut self, x: f32, y: f32, now: Instant) -> bool {
        let Some((down_x, down_y, down_at)) = self.down.take() else {
            return false;
        };
        let within_slop = (down_x - x).abs() < self.slop && (down_y - y).abs() < self.slop;
        let within_time = self
            .timeout
            .is_none_or(|limit| now.saturating_duration_since(down_at) <= limit);
        within_slop && within_time
    }

    /// Forget any pending down.
    pub fn cancel(&mut self) {
        self.down = None;
    }

    /// Whether a down is pending.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.down.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
