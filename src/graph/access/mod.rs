//! Internal graph building blocks.
//!
//! Kept `pub(crate)` so graph algorithms share scratch state (visited sets)
//! without exposing it as part of the public API surface.

pub(crate) mod visited;
