#![forbid(unsafe_code)]

//! The drawer state machine.
//!
//! [`DrawerController`] owns the content offset and is the single writer of
//! every drawer side effect. It is driven by three inputs, all on the UI
//! thread: pointer events ([`on_pointer`](DrawerController::on_pointer) and
//! [`on_overlay_pointer`](DrawerController::on_overlay_pointer)), the frame
//! tick ([`on_frame`](DrawerController::on_frame)), and programmatic calls
//! (`open`, `close`, `toggle`).
//!
//! State machine:
//!
//! ```text
//! Closed ──down in zone──▶ Dragging ──up──▶ Animating ──finished──▶ Open
//!   ▲                         ▲                 │  ▲                  │
//!   │                         └──down in zone───┘  └──open/close/tap──┘
//!   └────────────finished at 0──────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. `-width(Left) <= offset <= width(Right)` after every call.
//! 2. At rest, `Closed` iff `offset == 0`, and `Open` iff `offset` is the
//!    active side's open bound.
//! 3. At most one side is active; activating a side hides the other panel.
//! 4. The overlay is visible iff `offset != 0`.
//! 5. While `Animating`, every tick that does not finish requests another.
//!
//! # Failure Modes
//!
//! - `open` on a side without content, disabled, or with zero width is a
//!   no-op.
//! - Pointer coordinates are sanitized, never rejected.
//! - A zero duration finishes on the first tick.

use std::time::Duration;

use navdrawer_core::{
    DragMove, DragRecognizer, Easing, EventResult, Insets, PanelSide, PointerEvent,
    PointerEventKind, ScrollPhysics, Settle, Track,
};

#[cfg(feature = "tracing")]
use navdrawer_core::logging::debug;

use crate::config::DrawerConfig;
use crate::error::DrawerError;
use crate::host::DrawerHost;
use crate::overlay::OverlayGate;
use crate::panel::PanelContent;

// ---------------------------------------------------------------------------
// DrawerState
// ---------------------------------------------------------------------------

/// Where the drawer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawerState {
    /// Offset is zero and nothing is moving.
    #[default]
    Closed,
    /// A finger is moving the content.
    Dragging,
    /// A run toward a bound is in flight.
    Animating,
    /// Offset rests at the active side's open bound.
    Open,
}

impl DrawerState {
    /// Whether nothing is moving.
    #[inline]
    #[must_use]
    pub fn is_at_rest(self) -> bool {
        matches!(self, Self::Closed | Self::Open)
    }
}

// ---------------------------------------------------------------------------
// DrawerController
// ---------------------------------------------------------------------------

/// Slide-out side drawer driven by pointer events and frame ticks.
pub struct DrawerController<H: DrawerHost> {
    config: DrawerConfig,
    host: H,
    panels: [Option<PanelContent<H::Panel>>; 2],
    offset: f32,
    state: DrawerState,
    active: Option<PanelSide>,
    viewport: (f32, f32),
    safe_area: Insets,
    overlay_visible: bool,
    recognizer: DragRecognizer,
    physics: ScrollPhysics,
    gate: OverlayGate,
}

impl<H: DrawerHost> DrawerController<H> {
    /// Create a closed drawer with no panel content.
    pub fn new(config: DrawerConfig, host: H) -> Self {
        Self {
            recognizer: DragRecognizer::new(config.drag),
            physics: ScrollPhysics::new(config.easing),
            gate: OverlayGate::new(&config.overlay),
            config,
            host,
            panels: [None, None],
            offset: 0.0,
            state: DrawerState::Closed,
            active: None,
            viewport: (0.0, 0.0),
            safe_area: Insets::ZERO,
            overlay_visible: false,
        }
    }

    // -- Programmatic control -----------------------------------------------

    /// Animate `side` fully open.
    ///
    /// If the other side is active its panel is hidden immediately and the
    /// run starts from the current offset. Calling this while already open
    /// restarts a run to the same bound.
    pub fn open(&mut self, side: PanelSide) {
        let Some(track) = self.available_track(side) else {
            #[cfg(feature = "tracing")]
            debug!(side = %side, "open ignored: no panel content");
            return;
        };
        self.recognizer.reset();
        self.activate(side);
        self.start_run(side, track.open_offset());
    }

    /// Animate `side` closed. No-op unless `side` is the active side.
    pub fn close(&mut self, side: PanelSide) {
        if self.active != Some(side) {
            return;
        }
        self.recognizer.reset();
        self.start_run(side, 0.0);
    }

    /// Close whichever side is active.
    pub fn close_active(&mut self) {
        if let Some(side) = self.active {
            self.close(side);
        }
    }

    /// Close `side` if it is open or opening, otherwise open it.
    pub fn toggle(&mut self, side: PanelSide) {
        if self.active == Some(side) && self.resting_target() != 0.0 {
            self.close(side);
        } else {
            self.open(side);
        }
    }

    // -- Inputs -------------------------------------------------------------

    /// Feed a pointer event in drawer (content) space.
    ///
    /// Returns [`EventResult::Ignored`] when the event is not part of a
    /// drawer drag, so the host can deliver it to the content underneath.
    pub fn on_pointer(&mut self, event: PointerEvent) -> EventResult {
        let event = event.sanitized();
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event.x),
            PointerEventKind::Move => self.pointer_move(event.x),
            PointerEventKind::Up => {
                let settle = self.recognizer.pointer_up();
                self.release(settle)
            }
            PointerEventKind::Cancel => {
                let settle = self.recognizer.pointer_cancel(self.offset);
                self.release(settle)
            }
        }
    }

    /// Feed a pointer event in overlay-local space.
    ///
    /// Drags are forwarded to [`on_pointer`](Self::on_pointer) after
    /// translation; a tap closes the active side.
    pub fn on_overlay_pointer(&mut self, event: PointerEvent) -> EventResult {
        let event = event.sanitized();
        if !self.overlay_visible && !self.recognizer.is_dragging() {
            return EventResult::Ignored;
        }
        let now = self.host.now();
        let out = self.gate.handle(event, self.offset, now);
        self.on_pointer(out.forwarded);
        if out.tapped {
            #[cfg(feature = "tracing")]
            debug!(side = ?self.active, "overlay tapped");
            self.close_active();
        }
        EventResult::Handled
    }

    /// Advance the running animation by one display frame.
    ///
    /// Returns `true` while the animation needs more frames. The host is
    /// also asked for the next frame through
    /// [`DrawerHost::request_frame`].
    pub fn on_frame(&mut self) -> bool {
        if self.state != DrawerState::Animating {
            return false;
        }
        let now = self.host.now();
        let (value, finished) = self.physics.advance(now);
        self.apply_offset(value);
        if finished {
            self.come_to_rest();
            false
        } else {
            self.host.request_frame();
            true
        }
    }

    // -- Content and layout -------------------------------------------------

    /// Install the panel for `side`, replacing any previous one.
    pub fn set_content_for(
        &mut self,
        side: PanelSide,
        content: PanelContent<H::Panel>,
    ) -> Result<(), DrawerError> {
        if !self.config.sides.contains_side(side) {
            return Err(DrawerError::SideDisabled(side));
        }
        self.host.attach_panel(side, content.view());
        self.host
            .apply_panel_padding(side, content.padded_for(self.safe_area));
        self.host.set_panel_visible(side, self.active == Some(side));
        self.panels[side.index()] = Some(content);
        self.fit_to_width(side);
        Ok(())
    }

    /// Remove the panel for `side`. An active side snaps closed.
    pub fn clear_content(&mut self, side: PanelSide) -> Option<PanelContent<H::Panel>> {
        let removed = self.panels[side.index()].take()?;
        self.host.set_panel_visible(side, false);
        if self.active == Some(side) {
            self.recognizer.reset();
            self.physics.stop();
            self.apply_offset(0.0);
            self.come_to_rest();
        } else {
            self.fit_to_width(side);
        }
        Some(removed)
    }

    /// Report the measured width of `side`'s panel.
    pub fn on_measure(&mut self, side: PanelSide, width: f32) {
        let Some(panel) = self.panels[side.index()].as_mut() else {
            return;
        };
        panel.set_width(width);
        self.fit_to_width(side);
    }

    /// Report the content surface size.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (non_negative(width), non_negative(height));
    }

    /// Report the safe display area; re-pads every panel.
    pub fn on_layout(&mut self, safe_area: Insets) {
        self.safe_area = safe_area;
        for side in PanelSide::ALL {
            if let Some(panel) = self.panels[side.index()].as_ref() {
                self.host.apply_panel_padding(side, panel.padded_for(safe_area));
            }
        }
    }

    /// Force the drawer closed without animating, dropping any run or drag.
    pub fn detach(&mut self) {
        self.recognizer.reset();
        self.physics.stop();
        self.gate.reset();
        if self.offset != 0.0 {
            self.apply_offset(0.0);
        }
        self.state = DrawerState::Closed;
        if let Some(side) = self.active.take() {
            self.host.set_panel_visible(side, false);
        }
    }

    /// Set the run duration for `side`.
    pub fn set_animation_duration(&mut self, side: PanelSide, duration: Duration) {
        self.config.side_mut(side).duration = duration;
    }

    /// Set the easing curve for subsequent runs.
    pub fn set_interpolator(&mut self, easing: Easing) {
        self.config.easing = easing;
        self.physics.set_easing(easing);
    }

    // -- Accessors ----------------------------------------------------------

    /// Current content offset.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Side currently shown, if any.
    #[inline]
    #[must_use]
    pub fn active_side(&self) -> Option<PanelSide> {
        self.active
    }

    /// Whether the content sits at its rest position.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.offset == 0.0
    }

    /// Whether `side` rests fully open.
    #[must_use]
    pub fn is_open(&self, side: PanelSide) -> bool {
        self.state == DrawerState::Open && self.active == Some(side)
    }

    /// Measured width of `side`'s panel, `0.0` without content.
    #[must_use]
    pub fn panel_width(&self, side: PanelSide) -> f32 {
        self.panels[side.index()]
            .as_ref()
            .map_or(0.0, PanelContent::width)
    }

    /// Panel content for `side`.
    #[must_use]
    pub fn content(&self, side: PanelSide) -> Option<&PanelContent<H::Panel>> {
        self.panels[side.index()].as_ref()
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The live configuration.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    // -- Internals ----------------------------------------------------------

    fn available_track(&self, side: PanelSide) -> Option<Track> {
        let width = self.panel_width(side);
        (self.config.sides.contains_side(side) && width > 0.0)
            .then(|| Track::new(side, width, self.viewport.0))
    }

    fn resting_target(&self) -> f32 {
        match self.state {
            DrawerState::Animating => self.physics.final_offset().unwrap_or(self.offset),
            _ => self.offset,
        }
    }

    fn pointer_down(&mut self, x: f32) -> EventResult {
        if self.state == DrawerState::Dragging {
            // Previous gesture never ended.
            let settle = self.recognizer.pointer_cancel(self.offset);
            self.release(settle);
        }

        // The exposed side is the one the offset lies on, which differs from
        // the active side while a run crosses over from the other panel.
        let track = if self.offset < 0.0 {
            self.available_track(PanelSide::Left)
        } else if self.offset > 0.0 {
            self.available_track(PanelSide::Right)
        } else {
            None
        };
        if track.is_none()
            && PanelSide::ALL
                .iter()
                .all(|&side| self.available_track(side).is_none())
        {
            return EventResult::Ignored;
        }

        self.recognizer.pointer_down(x, self.offset, track);
        if !self.recognizer.is_dragging() {
            return EventResult::Ignored;
        }
        if self.state == DrawerState::Animating {
            self.physics.stop();
            #[cfg(feature = "tracing")]
            debug!(offset = self.offset, "run caught by pointer");
        }
        if let Some(track) = track {
            self.activate(track.side);
        }
        self.state = DrawerState::Dragging;
        EventResult::Handled
    }

    fn pointer_move(&mut self, x: f32) -> EventResult {
        let left = self.available_track(PanelSide::Left);
        let right = self.available_track(PanelSide::Right);
        let tracked = self
            .recognizer
            .pointer_move(x, self.offset, |delta| if delta < 0.0 { left } else { right });
        match tracked {
            DragMove::Ignored => EventResult::Ignored,
            DragMove::Tracked { offset, track } => {
                if let Some(track) = track {
                    self.activate(track.side);
                }
                self.apply_offset(offset);
                EventResult::Handled
            }
        }
    }

    fn release(&mut self, settle: Option<Settle>) -> EventResult {
        let Some(settle) = settle else {
            return EventResult::Ignored;
        };
        match settle.side {
            Some(side) if settle.target != self.offset => self.start_run(side, settle.target),
            _ => self.come_to_rest(),
        }
        EventResult::Handled
    }

    fn activate(&mut self, side: PanelSide) {
        if self.active == Some(side) {
            return;
        }
        if let Some(previous) = self.active.replace(side) {
            #[cfg(feature = "tracing")]
            debug!(hidden = %previous, shown = %side, "competing side hidden");
            self.host.set_panel_visible(previous, false);
        } else {
            #[cfg(feature = "tracing")]
            debug!(side = %side, "side activated");
        }
        self.host.set_panel_visible(side, true);
    }

    fn start_run(&mut self, side: PanelSide, target: f32) {
        let duration = self.config.side(side).duration;
        let now = self.host.now();
        self.physics.start(self.offset, target, duration, now);
        self.state = DrawerState::Animating;

        #[cfg(feature = "tracing")]
        debug!(
            side = %side,
            from = self.offset,
            to = target,
            duration_ms = duration.as_millis() as u64,
            "drawer run started"
        );

        self.host.request_frame();
    }

    fn come_to_rest(&mut self) {
        // A run or settle aimed at a bound measured before the last resize.
        if self.offset != 0.0 {
            if let Some(side) = self.active {
                let bound = side.sign() * self.panel_width(side);
                if self.offset != bound {
                    self.apply_offset(bound);
                }
            }
        }

        if self.offset == 0.0 {
            self.state = DrawerState::Closed;
            if let Some(side) = self.active.take() {
                self.host.set_panel_visible(side, false);
            }
        } else {
            self.state = DrawerState::Open;
        }

        #[cfg(feature = "tracing")]
        debug!(state = ?self.state, offset = self.offset, "drawer at rest");
    }

    fn bounds(&self) -> (f32, f32) {
        (
            -self.panel_width(PanelSide::Left),
            self.panel_width(PanelSide::Right),
        )
    }

    fn apply_offset(&mut self, value: f32) {
        let (lo, hi) = self.bounds();
        let offset = if value.is_nan() { 0.0 } else { value.clamp(lo, hi) };
        self.offset = offset;
        self.host.apply_offset(offset);

        let visible = OverlayGate::is_visible(offset);
        if visible != self.overlay_visible {
            self.overlay_visible = visible;
            self.host.set_overlay_visible(visible);
            if !visible {
                self.gate.reset();
            }
        }
    }

    /// Keep the offset legal after `side`'s width changed.
    fn fit_to_width(&mut self, side: PanelSide) {
        if self.is_open(side) {
            let target = side.sign() * self.panel_width(side);
            if target != self.offset {
                self.apply_offset(target);
            }
            if self.offset == 0.0 {
                self.come_to_rest();
            }
            return;
        }
        let (lo, hi) = self.bounds();
        let clamped = self.offset.clamp(lo, hi);
        if clamped != self.offset {
            self.apply_offset(clamped);
            if self.state.is_at_rest() {
                self.come_to_rest();
            }
        }
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;
    use navdrawer_core::SideSet;

    const FRAME: Duration = Duration::from_millis(16);

    fn drawer(config: DrawerConfig) -> DrawerController<RecordingHost<&'static str>> {
        let mut d = DrawerController::new(config, RecordingHost::new());
        d.set_viewport(400.0, 800.0);
        d
    }

    fn left_drawer() -> DrawerController<RecordingHost<&'static str>> {
        let mut d = drawer(DrawerConfig::single_side());
        d.set_content_for(PanelSide::Left, PanelContent::new("menu").with_width(240.0))
            .unwrap();
        d
    }

    fn dual_drawer() -> DrawerController<RecordingHost<&'static str>> {
        let mut d = drawer(DrawerConfig::dual_side());
        d.set_content_for(PanelSide::Left, PanelContent::new("menu").with_width(240.0))
            .unwrap();
        d.set_content_for(PanelSide::Right, PanelContent::new("info").with_width(200.0))
            .unwrap();
        d
    }

    fn run_frames(d: &mut DrawerController<RecordingHost<&'static str>>) -> usize {
        let mut frames = 0;
        while frames < 1000 {
            d.host_mut().advance(FRAME);
            frames += 1;
            if !d.on_frame() {
                break;
            }
        }
        frames
    }

    #[test]
    fn starts_closed() {
        let d = left_drawer();
        assert_eq!(d.state(), DrawerState::Closed);
        assert!(d.is_closed());
        assert_eq!(d.active_side(), None);
        assert!(!d.host().overlay_visible);
    }

    #[test]
    fn open_runs_to_left_bound() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        assert_eq!(d.state(), DrawerState::Animating);
        assert_eq!(d.host().frame_requests, 1);
        assert!(d.host().is_panel_visible(PanelSide::Left));

        run_frames(&mut d);
        assert_eq!(d.offset(), -240.0);
        assert_eq!(d.state(), DrawerState::Open);
        assert!(d.is_open(PanelSide::Left));
        assert!(d.host().overlay_visible);
    }

    #[test]
    fn close_returns_to_zero_and_hides_panel() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        run_frames(&mut d);
        d.close(PanelSide::Left);
        run_frames(&mut d);
        assert_eq!(d.offset(), 0.0);
        assert_eq!(d.state(), DrawerState::Closed);
        assert_eq!(d.active_side(), None);
        assert!(!d.host().is_panel_visible(PanelSide::Left));
        assert!(!d.host().overlay_visible);
    }

    #[test]
    fn close_of_inactive_side_is_noop() {
        let mut d = dual_drawer();
        d.open(PanelSide::Left);
        run_frames(&mut d);
        d.close(PanelSide::Right);
        assert_eq!(d.state(), DrawerState::Open);
    }

    #[test]
    fn open_without_content_is_noop() {
        let mut d = drawer(DrawerConfig::dual_side());
        d.open(PanelSide::Right);
        assert_eq!(d.state(), DrawerState::Closed);
        assert_eq!(d.host().frame_requests, 0);
        assert!(d.host().offsets.is_empty());
    }

    #[test]
    fn content_for_disabled_side_is_rejected() {
        let mut d = drawer(DrawerConfig::single_side());
        let err = d
            .set_content_for(PanelSide::Right, PanelContent::new("info"))
            .unwrap_err();
        assert_eq!(err, DrawerError::SideDisabled(PanelSide::Right));
        assert!(d.content(PanelSide::Right).is_none());
    }

    #[test]
    fn toggle_mid_close_reopens() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        run_frames(&mut d);
        d.close(PanelSide::Left);
        d.host_mut().advance(FRAME);
        d.on_frame();
        d.toggle(PanelSide::Left);
        run_frames(&mut d);
        assert!(d.is_open(PanelSide::Left));
    }

    #[test]
    fn frame_without_run_does_nothing() {
        let mut d = left_drawer();
        assert!(!d.on_frame());
        assert!(d.host().offsets.is_empty());
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut d = left_drawer();
        d.set_animation_duration(PanelSide::Left, Duration::ZERO);
        d.open(PanelSide::Left);
        assert!(!d.on_frame());
        assert_eq!(d.offset(), -240.0);
        assert_eq!(d.state(), DrawerState::Open);
    }

    #[test]
    fn move_outside_drag_zone_is_ignored() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        run_frames(&mut d);
        // x = 100 lies under the exposed panel, not the content.
        assert_eq!(d.on_pointer(PointerEvent::down(100.0, 0.0)), EventResult::Ignored);
        assert_eq!(d.on_pointer(PointerEvent::moved(50.0, 0.0)), EventResult::Ignored);
        assert_eq!(d.on_pointer(PointerEvent::up(50.0, 0.0)), EventResult::Ignored);
        assert_eq!(d.offset(), -240.0);
        assert_eq!(d.state(), DrawerState::Open);
    }

    #[test]
    fn pointer_ignored_without_any_panel() {
        let mut d = drawer(DrawerConfig::dual_side());
        assert_eq!(d.on_pointer(PointerEvent::down(10.0, 0.0)), EventResult::Ignored);
        assert_eq!(d.on_pointer(PointerEvent::moved(80.0, 0.0)), EventResult::Ignored);
    }

    #[test]
    fn drag_from_closed_picks_side_by_direction() {
        let mut d = dual_drawer();
        d.on_pointer(PointerEvent::down(200.0, 0.0));
        d.on_pointer(PointerEvent::moved(150.0, 0.0));
        assert_eq!(d.active_side(), Some(PanelSide::Right));
        assert_eq!(d.offset(), 50.0);
        assert!(d.host().is_panel_visible(PanelSide::Right));
        assert!(!d.host().is_panel_visible(PanelSide::Left));
    }

    #[test]
    fn drag_release_opening_settles_open() {
        let mut d = left_drawer();
        assert_eq!(d.on_pointer(PointerEvent::down(10.0, 0.0)), EventResult::Handled);
        assert_eq!(d.state(), DrawerState::Dragging);
        d.on_pointer(PointerEvent::moved(60.0, 0.0));
        d.on_pointer(PointerEvent::moved(100.0, 0.0));
        assert_eq!(d.offset(), -90.0);
        d.on_pointer(PointerEvent::up(100.0, 0.0));
        assert_eq!(d.state(), DrawerState::Animating);
        run_frames(&mut d);
        assert_eq!(d.offset(), -240.0);
    }

    #[test]
    fn drag_release_closing_settles_closed() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        run_frames(&mut d);
        d.on_pointer(PointerEvent::down(300.0, 0.0));
        d.on_pointer(PointerEvent::moved(250.0, 0.0));
        d.on_pointer(PointerEvent::moved(200.0, 0.0));
        assert_eq!(d.offset(), -140.0);
        d.on_pointer(PointerEvent::up(200.0, 0.0));
        run_frames(&mut d);
        assert!(d.is_closed());
        assert_eq!(d.state(), DrawerState::Closed);
    }

    #[test]
    fn drag_is_clamped() {
        let mut d = left_drawer();
        d.on_pointer(PointerEvent::down(0.0, 0.0));
        d.on_pointer(PointerEvent::moved(1000.0, 0.0));
        assert_eq!(d.offset(), -240.0);
        d.on_pointer(PointerEvent::moved(-5000.0, 0.0));
        assert_eq!(d.offset(), 0.0);
    }

    #[test]
    fn press_release_in_place_on_open_stays_open() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        run_frames(&mut d);
        d.on_pointer(PointerEvent::down(300.0, 0.0));
        d.on_pointer(PointerEvent::up(300.0, 0.0));
        assert_eq!(d.state(), DrawerState::Open);
        assert_eq!(d.offset(), -240.0);
    }

    #[test]
    fn cancel_settles_by_midpoint() {
        let mut d = left_drawer();
        d.on_pointer(PointerEvent::down(0.0, 0.0));
        d.on_pointer(PointerEvent::moved(150.0, 0.0));
        d.on_pointer(PointerEvent::moved(130.0, 0.0));
        assert_eq!(d.offset(), -130.0);
        d.on_pointer(PointerEvent::cancel(130.0, 0.0));
        run_frames(&mut d);
        assert_eq!(d.offset(), -240.0);
    }

    #[test]
    fn down_catches_running_animation() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        for _ in 0..5 {
            d.host_mut().advance(FRAME);
            d.on_frame();
        }
        let caught = d.offset();
        assert!(caught < 0.0 && caught > -240.0);
        d.on_pointer(PointerEvent::down(-caught + 20.0, 0.0));
        assert_eq!(d.state(), DrawerState::Dragging);
        assert!(!d.on_frame());
        assert_eq!(d.offset(), caught);
    }

    #[test]
    fn overlay_tap_closes() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        run_frames(&mut d);
        assert_eq!(
            d.on_overlay_pointer(PointerEvent::down(20.0, 300.0)),
            EventResult::Handled
        );
        d.on_overlay_pointer(PointerEvent::up(21.0, 300.0));
        assert_eq!(d.state(), DrawerState::Animating);
        run_frames(&mut d);
        assert_eq!(d.state(), DrawerState::Closed);
    }

    #[test]
    fn overlay_ignored_when_closed() {
        let mut d = left_drawer();
        assert_eq!(
            d.on_overlay_pointer(PointerEvent::down(20.0, 300.0)),
            EventResult::Ignored
        );
    }

    #[test]
    fn measure_while_open_snaps_to_new_bound() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        run_frames(&mut d);
        d.on_measure(PanelSide::Left, 180.0);
        assert_eq!(d.offset(), -180.0);
        assert!(d.is_open(PanelSide::Left));
        d.on_measure(PanelSide::Left, 0.0);
        assert_eq!(d.offset(), 0.0);
        assert_eq!(d.state(), DrawerState::Closed);
    }

    #[test]
    fn clear_content_of_active_side_snaps_closed() {
        let mut d = left_drawer();
        d.open(PanelSide::Left);
        run_frames(&mut d);
        let removed = d.clear_content(PanelSide::Left);
        assert_eq!(removed.map(|c| *c.view()), Some("menu"));
        assert_eq!(d.offset(), 0.0);
        assert_eq!(d.state(), DrawerState::Closed);
        assert!(!d.host().overlay_visible);
    }

    #[test]
    fn detach_forces_closed() {
        let mut d = dual_drawer();
        d.open(PanelSide::Right);
        d.host_mut().advance(FRAME);
        d.on_frame();
        d.detach();
        assert_eq!(d.offset(), 0.0);
        assert_eq!(d.state(), DrawerState::Closed);
        assert_eq!(d.active_side(), None);
        assert!(!d.on_frame());
    }

    #[test]
    fn interpolator_is_applied() {
        let mut d = left_drawer();
        d.set_interpolator(Easing::Linear);
        assert!(matches!(d.config().easing, Easing::Linear));
        d.open(PanelSide::Left);
        d.host_mut().advance(Duration::from_millis(115));
        d.on_frame();
        assert!((d.offset() + 120.0).abs() < 1.0);
    }

    #[test]
    fn right_only_drawer_opens_positive() {
        let mut d = drawer(DrawerConfig::single_side().with_sides(SideSet::RIGHT));
        d.set_content_for(PanelSide::Right, PanelContent::new("info").with_width(200.0))
            .unwrap();
        d.open(PanelSide::Right);
        run_frames(&mut d);
        assert_eq!(d.offset(), 200.0);
    }
}
