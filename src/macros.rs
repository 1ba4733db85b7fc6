//! Internal logging macros.
//!
//! `trace_event!` forwards to `tracing::trace!` when the `tracing` feature is
//! enabled and expands to nothing otherwise, so call sites stay unconditional.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}
