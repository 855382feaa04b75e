//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export `tracing::trace`; without it they expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::trace;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::trace;
