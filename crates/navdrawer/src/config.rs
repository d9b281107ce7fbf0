#![forbid(unsafe_code)]

//! Drawer configuration.
//!
//! Captures every tunable of the drawer as a single [`DrawerConfig`]. With
//! the `config` feature it can be loaded from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # drawer.toml
//! sides = "LEFT | RIGHT"
//! easing = { decelerate = { factor = 1.5 } }
//!
//! [left]
//! duration_ms = 180
//!
//! [overlay]
//! tap_slop = 3.0
//! tap_timeout_ms = 500
//! ```
//!
//! ```rust,ignore
//! let config = DrawerConfig::from_toml_file("drawer.toml")?;
//! let config = DrawerConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `DrawerConfig::default()` is the single-side preset: left panel only,
//! accelerate-decelerate easing over 230ms.

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

use navdrawer_core::gesture::{DEFAULT_TAP_SLOP, DEFAULT_TAP_TIMEOUT};
#[cfg(feature = "tracing")]
use navdrawer_core::logging::warn;
use navdrawer_core::{DragConfig, Easing, PanelSide, SideSet};

/// Default run length for the single-side preset.
pub const SINGLE_SIDE_DURATION: Duration = Duration::from_millis(230);

/// Default run length for the dual-side preset.
pub const DUAL_SIDE_DURATION: Duration = Duration::from_millis(180);

/// Deceleration factor for the dual-side preset.
pub const DUAL_SIDE_DECELERATION: f32 = 1.5;

// ---------------------------------------------------------------------------
// Top-level DrawerConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`DrawerController`](crate::DrawerController).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct DrawerConfig {
    /// Which panels exist.
    pub sides: SideSet,
    /// Curve for every open, close, and settle run.
    pub easing: Easing,
    /// Left panel parameters.
    pub left: SideConfig,
    /// Right panel parameters.
    pub right: SideConfig,
    /// Drag recognition thresholds.
    pub drag: DragConfig,
    /// Overlay tap recognition.
    pub overlay: OverlayConfig,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self::single_side()
    }
}

impl DrawerConfig {
    /// Left panel only, accelerate-decelerate over 230ms.
    #[must_use]
    pub fn single_side() -> Self {
        Self {
            sides: SideSet::LEFT,
            easing: Easing::AccelerateDecelerate,
            left: SideConfig::new(SINGLE_SIDE_DURATION),
            right: SideConfig::new(SINGLE_SIDE_DURATION),
            drag: DragConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }

    /// Left and right panels, stronger deceleration over 180ms.
    #[must_use]
    pub fn dual_side() -> Self {
        Self {
            sides: SideSet::LEFT | SideSet::RIGHT,
            easing: Easing::decelerate(DUAL_SIDE_DECELERATION),
            left: SideConfig::new(DUAL_SIDE_DURATION),
            right: SideConfig::new(DUAL_SIDE_DURATION),
            drag: DragConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }

    /// Set the enabled sides (builder pattern).
    #[must_use]
    pub fn with_sides(mut self, sides: SideSet) -> Self {
        self.sides = sides;
        self
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set one side's run duration (builder pattern).
    #[must_use]
    pub fn with_duration(mut self, side: PanelSide, duration: Duration) -> Self {
        self.side_mut(side).duration = duration;
        self
    }

    /// Set the drag thresholds (builder pattern).
    #[must_use]
    pub fn with_drag(mut self, drag: DragConfig) -> Self {
        self.drag = drag;
        self
    }

    /// Set the overlay parameters (builder pattern).
    #[must_use]
    pub fn with_overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }

    /// Parameters for `side`.
    #[must_use]
    pub fn side(&self, side: PanelSide) -> &SideConfig {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
        }
    }

    /// Mutable parameters for `side`.
    pub fn side_mut(&mut self, side: PanelSide) -> &mut SideConfig {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, DrawerConfigError> {
        let config: Self = toml::from_str(s).map_err(DrawerConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DrawerConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(DrawerConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, DrawerConfigError> {
        let config: Self = serde_json::from_str(s).map_err(DrawerConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DrawerConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(DrawerConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.sides.is_empty() {
            errors.push("sides must enable at least one panel".into());
        }

        match self.easing {
            Easing::Accelerate { factor } | Easing::Decelerate { factor }
                if !(factor.is_finite() && factor > 0.0) =>
            {
                errors.push(format!("easing.factor must be > 0, got {factor}"));
            }
            _ => {}
        }

        let noise = self.drag.noise_threshold;
        if !(noise.is_finite() && noise >= 0.0) {
            errors.push(format!("drag.noise_threshold must be >= 0, got {noise}"));
        }

        let slop = self.overlay.tap_slop;
        if !(slop.is_finite() && slop > 0.0) {
            errors.push(format!("overlay.tap_slop must be > 0, got {slop}"));
        }

        errors
    }

    /// Return `self` if valid, otherwise every validation error.
    pub fn validated(self) -> Result<Self, DrawerConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            #[cfg(feature = "tracing")]
            warn!(errors = ?errors, "drawer config rejected");
            Err(DrawerConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Per-side parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SideConfig {
    /// Length of open, close, and settle runs. Zero jumps immediately.
    #[cfg_attr(feature = "config", serde(rename = "duration_ms", with = "millis"))]
    pub duration: Duration,
}

impl SideConfig {
    /// Create a side config with the given run duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Default for SideConfig {
    fn default() -> Self {
        Self::new(SINGLE_SIDE_DURATION)
    }
}

/// Overlay tap recognition parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct OverlayConfig {
    /// Maximum per-axis movement (px) between down and up (default: 3).
    pub tap_slop: f32,
    /// Maximum press length for a tap; `None` disables the limit (default: 500ms).
    #[cfg_attr(feature = "config", serde(rename = "tap_timeout_ms", with = "millis_opt"))]
    pub tap_timeout: Option<Duration>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            tap_slop: DEFAULT_TAP_SLOP,
            tap_timeout: Some(DEFAULT_TAP_TIMEOUT),
        }
    }
}

#[cfg(feature = "config")]
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis().min(u128::from(u64::MAX)) as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(feature = "config")]
mod millis_opt {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => s.serialize_some(&(d.as_millis().min(u128::from(u64::MAX)) as u64)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Option::<u64>::deserialize(d).map(|ms| ms.map(Duration::from_millis))
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`DrawerConfig`].
#[derive(Debug)]
pub enum DrawerConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for DrawerConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for DrawerConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
