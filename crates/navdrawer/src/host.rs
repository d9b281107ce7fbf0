#![forbid(unsafe_code)]

//! The host collaborator.
//!
//! The drawer never touches a view hierarchy. Everything visible goes
//! through [`DrawerHost`]: the content translation, overlay and panel
//! visibility, panel padding, and the request for another frame tick.
//!
//! [`RecordingHost`] implements the trait in memory with a manually advanced
//! clock. It is what the crate's own tests drive, and is public so hosts can
//! write their own deterministic tests.

use std::time::Duration;

use navdrawer_core::{Insets, PanelSide};
use web_time::Instant;

/// Side effects and clock the drawer needs from its host toolkit.
pub trait DrawerHost {
    /// Host view type held by [`PanelContent`](crate::PanelContent).
    type Panel;

    /// Current frame time.
    fn now(&self) -> Instant;

    /// Translate the content layer horizontally by `offset` pixels.
    fn apply_offset(&mut self, offset: f32);

    /// Show or hide the overlay above the content.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Show or hide one panel.
    fn set_panel_visible(&mut self, side: PanelSide, visible: bool);

    /// Place a panel view behind the content. Called when content is set.
    fn attach_panel(&mut self, _side: PanelSide, _panel: &Self::Panel) {}

    /// Apply padding to a panel's content.
    fn apply_panel_padding(&mut self, _side: PanelSide, _padding: Insets) {}

    /// Ask for [`DrawerController::on_frame`](crate::DrawerController::on_frame)
    /// to be called on the next display frame.
    fn request_frame(&mut self);
}

/// In-memory host that records every side effect.
#[derive(Debug, Clone)]
pub struct RecordingHost<P = ()> {
    now: Instant,
    /// Every offset applied, in order.
    ///
    /// Never trimmed: one entry per drag move and per animation frame. Clear
    /// it between scenarios in long-running tests.
    pub offsets: Vec<f32>,
    /// Current overlay visibility.
    pub overlay_visible: bool,
    /// Number of overlay visibility changes.
    pub overlay_toggles: usize,
    /// Current panel visibility, indexed by [`PanelSide::index`].
    pub panel_visible: [bool; 2],
    /// Last padding applied per side.
    pub padding: [Option<Insets>; 2],
    /// Panels attached per side.
    pub attached: [Option<P>; 2],
    /// Outstanding frame requests.
    pub frame_requests: usize,
}

impl<P> Default for RecordingHost<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> RecordingHost<P> {
    /// Create a host with the clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
            offsets: Vec::new(),
            overlay_visible: false,
            overlay_toggles: 0,
            panel_visible: [false; 2],
            padding: [None, None],
            attached: [None, None],
            frame_requests: 0,
        }
    }

    /// Move the clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Last applied offset, `0.0` if none.
    #[must_use]
    pub fn last_offset(&self) -> f32 {
        self.offsets.last().copied().unwrap_or(0.0)
    }

    /// Whether a panel is visible.
    #[must_use]
    pub fn is_panel_visible(&self, side: PanelSide) -> bool {
        self.panel_visible[side.index()]
    }

    /// Consume one frame request, returning whether there was one.
    pub fn take_frame_request(&mut self) -> bool {
        if self.frame_requests == 0 {
            return false;
        }
        self.frame_requests -= 1;
        true
    }
}

impl<P: Clone> DrawerHost for RecordingHost<P> {
    type Panel = P;

    fn now(&self) -> Instant {
        self.now
    }

    fn apply_offset(&mut self, offset: f32) {
        self.offsets.push(offset);
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        if self.overlay_visible != visible {
            self.overlay_toggles += 1;
        }
        self.overlay_visible = visible;
    }

    fn set_panel_visible(&mut self, side: PanelSide, visible: bool) {
        self.panel_visible[side.index()] = visible;
    }

    fn attach_panel(&mut self, side: PanelSide, panel: &P) {
        self.attached[side.index()] = Some(panel.clone());
    }

    fn apply_panel_padding(&mut self, side: PanelSide, padding: Insets) {
        self.padding[side.index()] = Some(padding);
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }
}
