#![forbid(unsafe_code)]

//! Core: input events, hit-testing geometry, and logging for combobox widgets.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
