#![forbid(unsafe_code)]

//! Easing curves and timed offset interpolation.
//!
//! [`Easing`] maps linear progress `t` in `[0.0, 1.0]` to eased progress.
//! [`ScrollPhysics`] applies an easing to a single timed run between two
//! offsets and is polled once per display frame.
//!
//! # Invariants
//!
//! 1. Every built-in curve satisfies `apply(0.0) == 0.0` and
//!    `apply(1.0) == 1.0`, and is monotonically non-decreasing.
//! 2. `apply` clamps its input to `[0.0, 1.0]`.
//!
//! # Failure Modes
//!
//! - Non-finite or non-positive `factor` values fall back to `1.0`.
//! - A [`Easing::Custom`] curve may overshoot; callers that need bounded
//!   output must clamp the interpolated value themselves.

mod scroller;

pub use scroller::{AnimationRun, ScrollPhysics};

/// Plain easing function: linear progress in, eased progress out.
pub type EasingFn = fn(f32) -> f32;

/// Interpolation curve for drawer animations.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end, fastest through the middle (cosine S-curve).
    AccelerateDecelerate,
    /// Starts slow and speeds up: `t^(2 * factor)`.
    Accelerate { factor: f32 },
    /// Starts fast and slows down: `1 - (1 - t)^(2 * factor)`.
    Decelerate { factor: f32 },
    /// Cubic ease-out.
    EaseOutCubic,
    /// Cubic S-curve.
    EaseInOutCubic,
    /// Caller-supplied curve.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(EasingFn),
}

impl Default for Easing {
    fn default() -> Self {
        Self::AccelerateDecelerate
    }
}

impl Easing {
    /// Apply the curve to a progress value.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => {
                ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
            }
            Self::Accelerate { factor } => {
                let factor = sane_factor(factor);
                if factor == 1.0 {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            Self::Decelerate { factor } => {
                let factor = sane_factor(factor);
                let inv = 1.0 - t;
                if factor == 1.0 {
                    1.0 - inv * inv
                } else {
                    1.0 - inv.powf(2.0 * factor)
                }
            }
            Self::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Self::Custom(f) => f(t),
        }
    }

    /// Decelerate curve with the given factor.
    #[must_use]
    pub const fn decelerate(factor: f32) -> Self {
        Self::Decelerate { factor }
    }

    /// Accelerate curve with the given factor.
    #[must_use]
    pub const fn accelerate(factor: f32) -> Self {
        Self::Accelerate { factor }
    }

    /// Whether this is a caller-supplied curve.
    #[must_use]
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

fn sane_factor(factor: f32) -> f32 {
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}
