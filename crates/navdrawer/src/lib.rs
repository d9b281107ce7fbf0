#![forbid(unsafe_code)]

//! Slide-out side drawer for touch UIs.
//!
//! A drawer hides one or two panels behind the main content. Dragging the
//! content or calling [`DrawerController::open`] slides it sideways to
//! reveal a panel; releasing the finger, tapping the overlay, or calling
//! [`DrawerController::close`] slides it back.
//!
//! The crate owns only the state machine. Rendering, view hierarchies, and
//! the frame clock belong to the host and are reached through
//! [`DrawerHost`].
//!
//! ```ignore
//! let mut drawer = DrawerController::new(DrawerConfig::dual_side(), host);
//! drawer.set_content_for(PanelSide::Left, PanelContent::new(menu_view))?;
//! drawer.on_measure(PanelSide::Left, 240.0);
//!
//! // pointer stream from the content surface
//! drawer.on_pointer(PointerEvent::down(x, y));
//!
//! // once per display frame, while requested
//! drawer.on_frame();
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod overlay;
pub mod panel;

pub use config::{DrawerConfig, DrawerConfigError, OverlayConfig, SideConfig};
pub use controller::{DrawerController, DrawerState};
pub use error::DrawerError;
pub use host::{DrawerHost, RecordingHost};
pub use overlay::{GateOutput, OverlayGate};
pub use panel::PanelContent;

pub use navdrawer_core::{
    DragConfig, Easing, EventResult, Insets, PanelSide, PointerEvent, PointerEventKind, SideSet,
};
