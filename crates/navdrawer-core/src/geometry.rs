#![forbid(unsafe_code)]

//! Panel padding and safe-area geometry.

/// Edge distances in device-independent pixels.
///
/// Used both for a panel's own padding and for the safe display area the
/// host reports (status bar, notch, gesture bar).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    /// No padding on any edge.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Edges in CSS order: top, right, bottom, left.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same insets with `extra` added to the top edge.
    ///
    /// Left, right and bottom are preserved. A non-finite or negative `extra`
    /// adds nothing.
    #[must_use]
    pub fn with_extra_top(self, extra: f32) -> Self {
        let extra = if extra.is_finite() { extra.max(0.0) } else { 0.0 };
        Self {
            top: self.top + extra,
            ..self
        }
    }
}

impl From<(f32, f32, f32, f32)> for Insets {
    fn from((top, right, bottom, left): (f32, f32, f32, f32)) -> Self {
        Self::new(top, right, bottom, left)
    }
}
