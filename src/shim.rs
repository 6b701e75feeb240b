//! Shim module to abstract over optional `tracing` instrumentation.
//!
//! This module provides a `trace!` macro that transparently switches between
//! `tracing::trace!` (with the `tracing` feature) and nothing at all, so the
//! container hot paths carry no instrumentation cost by default.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "fixring", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace;
