#![forbid(unsafe_code)]

//! Core: pointer events, easing, scroll physics, and drag recognition.
//!
//! # Role in navdrawer
//! `navdrawer-core` holds the host-independent pieces of the side drawer.
//! Nothing here knows about a window, a view tree, or a renderer: the
//! widget crate (`navdrawer`) owns the state machine and talks to the host.
//!
//! # Primary responsibilities
//! - **PointerEvent**: the ordered DOWN/MOVE/UP/CANCEL stream, sanitized.
//! - **Easing / ScrollPhysics**: timed interpolation of an offset between two
//!   bounds, polled once per display frame.
//! - **DragRecognizer**: per-gesture tracking of finger motion, opening
//!   intent, and clamped 1:1 offset updates, parameterised by a [`Track`]
//!   instead of being duplicated per side.
//! - **TapDetector**: pointer-down/up pairs that stay within a small slop.
//!
//! [`Track`]: gesture::Track

pub mod animation;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod side;

pub use animation::{AnimationRun, Easing, EasingFn, ScrollPhysics};
pub use event::{EventResult, PointerEvent, PointerEventKind};
pub use geometry::Insets;
pub use gesture::{DragConfig, DragMove, DragRecognizer, GestureSession, Settle, TapDetector, Track};
pub use side::{PanelSide, SideSet};
