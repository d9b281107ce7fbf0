#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The drawer consumes a sequential, ordered stream of pointer events. Only
//! the horizontal coordinate drives the drawer itself; the vertical one is
//! carried for tap detection on the overlay.
//!
//! # Design Notes
//!
//! - Coordinates are device-independent pixels as `f32`.
//! - Out-of-range coordinates are clamped by [`PointerEvent::sanitized`],
//!   never rejected. NaN becomes `0.0`.

/// Largest coordinate magnitude the drawer will reason about.
pub const MAX_COORDINATE: f32 = 1.0e6;

/// The phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A finger touched down.
    Down,
    /// The finger moved while down.
    Move,
    /// The finger lifted.
    Up,
    /// The host took the stream away (e.g. a parent intercepted it).
    Cancel,
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The phase of the event.
    pub kind: PointerEventKind,
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    /// A `Down` event at `(x, y)`.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    /// A `Move` event at `(x, y)`.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// An `Up` event at `(x, y)`.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    /// A `Cancel` event at `(x, y)`.
    #[must_use]
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, x, y)
    }

    /// Same event with its horizontal coordinate replaced.
    #[must_use]
    pub const fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Clamp coordinates into `[-MAX_COORDINATE, MAX_COORDINATE]`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            kind: self.kind,
            x: sanitize_coordinate(self.x),
            y: sanitize_coordinate(self.y),
        }
    }
}

fn sanitize_coordinate(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-MAX_COORDINATE, MAX_COORDINATE)
    }
}

/// Whether the drawer consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventResult {
    /// The drawer used the event.
    Handled,
    /// The event should fall through to the content underneath.
    Ignored,
}

impl EventResult {
    /// `true` for [`EventResult::Handled`].
    #[inline]
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}
