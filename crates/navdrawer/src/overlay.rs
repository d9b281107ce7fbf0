#![forbid(unsafe_code)]

//! Overlay hit-catcher.
//!
//! The overlay covers the content whenever the drawer is not fully closed.
//! Its pointer stream is in overlay-local coordinates; [`OverlayGate`]
//! shifts it into drawer space before it reaches the drag recognizer, and
//! watches for a tap that should close the open panel.
//!
//! # Invariants
//!
//! 1. The overlay is visible exactly when the offset is non-zero.
//! 2. A forwarded event differs from its input only in `x`, shifted by
//!    `-offset`.
//! 3. `tapped` is only ever reported on an Up.

use navdrawer_core::{PointerEvent, PointerEventKind, TapDetector};
use web_time::Instant;

use crate::config::OverlayConfig;

/// What the gate made of one overlay event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateOutput {
    /// Event to feed the drawer, in drawer space.
    pub forwarded: PointerEvent,
    /// The event completed a tap.
    pub tapped: bool,
}

/// Translates overlay events and recognizes taps.
#[derive(Debug, Clone, Default)]
pub struct OverlayGate {
    tap: TapDetector,
}

impl OverlayGate {
    /// Create a gate from the overlay configuration.
    #[must_use]
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            tap: TapDetector::new(config.tap_slop, config.tap_timeout),
        }
    }

    /// Whether the overlay should be shown at `offset`.
    #[inline]
    #[must_use]
    pub fn is_visible(offset: f32) -> bool {
        offset != 0.0
    }

    /// Shift an overlay-local event into drawer space.
    #[inline]
    #[must_use]
    pub fn translate(event: PointerEvent, offset: f32) -> PointerEvent {
        event.with_x(event.x - offset)
    }

    /// Process one overlay event.
    ///
    /// Tap detection runs on the untranslated coordinates so that the panel
    /// moving underneath does not count as finger motion.
    pub fn handle(&mut self, event: PointerEvent, offset: f32, now: Instant) -> GateOutput {
        let tapped = match event.kind {
            PointerEventKind::Down => {
                self.tap.down(event.x, event.y, now);
                false
            }
            PointerEventKind::Up => self.tap.up(event.x, event.y, now),
            PointerEventKind::Cancel => {
                self.tap.cancel();
                false
            }
            PointerEventKind::Move => false,
        };
        GateOutput {
            forwarded: Self::translate(event, offset),
            tapped,
        }
    }

    /// Forget any pending press.
    pub fn reset(&mut self) {
        self.tap.cancel();
    }
}
