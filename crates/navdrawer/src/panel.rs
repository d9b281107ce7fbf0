#![forbid(unsafe_code)]

//! Per-side panel content.

use navdrawer_core::Insets;

/// A host-supplied panel view with its measured width and base padding.
///
/// The view is opaque to the drawer; it is only handed back to the host via
/// [`DrawerHost::attach_panel`](crate::DrawerHost::attach_panel). The width
/// starts at `0.0` until the host reports a measurement, which makes "open"
/// and "closed" coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelContent<P> {
    view: P,
    width: f32,
    base_padding: Insets,
}

impl<P> PanelContent<P> {
    /// Wrap a view with zero width and no padding.
    #[must_use]
    pub fn new(view: P) -> Self {
        Self {
            view,
            width: 0.0,
            base_padding: Insets::ZERO,
        }
    }

    /// Set a pre-measured width (builder pattern).
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.set_width(width);
        self
    }

    /// Set the padding the content was authored with (builder pattern).
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Insets>) -> Self {
        self.base_padding = padding.into();
        self
    }

    /// The host view.
    #[inline]
    #[must_use]
    pub fn view(&self) -> &P {
        &self.view
    }

    /// Measured width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Padding before any safe-area adjustment.
    #[inline]
    #[must_use]
    pub fn base_padding(&self) -> Insets {
        self.base_padding
    }

    /// Padding to apply under `safe_area`: the top inset is added to the
    /// base top padding, the other edges are kept.
    #[must_use]
    pub fn padded_for(&self, safe_area: Insets) -> Insets {
        self.base_padding.with_extra_top(safe_area.top)
    }

    pub(crate) fn set_width(&mut self, width: f32) {
        self.width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }
}
