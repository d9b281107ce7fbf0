#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros
//! the workspace logs with. Call sites import them from here and are
//! compiled out via `#[cfg(feature = "tracing")]` otherwise.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};
