#![forbid(unsafe_code)]

//! Panel sides.
//!
//! A drawer has at most two panels. The "no side" state is `Option::None`
//! wherever a side may be absent.

use bitflags::bitflags;

/// Which edge a panel slides out from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PanelSide {
    /// Panel behind the left edge; opening moves the offset negative.
    Left,
    /// Panel behind the right edge; opening moves the offset positive.
    Right,
}

impl PanelSide {
    /// Both sides, left first.
    pub const ALL: [PanelSide; 2] = [PanelSide::Left, PanelSide::Right];

    /// The opposite side.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Sign of the offset when this side is open: `-1.0` left, `+1.0` right.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Stable array index (left = 0, right = 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl std::fmt::Display for PanelSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

bitflags! {
    /// The set of sides a drawer is configured with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SideSet: u8 {
        /// Left panel enabled.
        const LEFT  = 0b01;
        /// Right panel enabled.
        const RIGHT = 0b10;
    }
}

impl SideSet {
    /// Whether `side` is enabled.
    #[inline]
    #[must_use]
    pub const fn contains_side(self, side: PanelSide) -> bool {
        self.contains(Self::from_side(side))
    }

    /// The single-side flag for `side`.
    #[inline]
    #[must_use]
    pub const fn from_side(side: PanelSide) -> Self {
        match side {
            PanelSide::Left => Self::LEFT,
            PanelSide::Right => Self::RIGHT,
        }
    }
}

impl Default for SideSet {
    fn default() -> Self {
        Self::LEFT
    }
}

impl From<PanelSide> for SideSet {
    fn from(side: PanelSide) -> Self {
        Self::from_side(side)
    }
}
