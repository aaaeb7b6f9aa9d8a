//! Command handlers.
//!
//! The tool has a single action, so there is one handler; it owns the
//! adapter wiring and leaves business rules to `h5webpack-core`.

pub mod scaffold;
