#![forbid(unsafe_code)]

//! Errors surfaced to the host.
//!
//! Gesture and animation edge cases are absorbed silently by the controller;
//! only misuse the host can act on is reported here.

use navdrawer_core::PanelSide;

/// Error returned by [`DrawerController`](crate::DrawerController) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerError {
    /// Content was supplied for a side the configuration does not enable.
    SideDisabled(PanelSide),
}

impl std::fmt::Display for DrawerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SideDisabled(side) => {
                write!(f, "the {side} panel is not enabled for this drawer")
            }
        }
    }
}

impl std::error::Error for DrawerError {}
