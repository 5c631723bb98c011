//! The session engine: configuration, host capability, and the scroller
//! state machine that ties the pure solvers together.

/// Tunables and validation.
pub mod config;
/// Resize coalescing.
pub mod debounce;
/// Host capability and the synthetic host.
pub mod host;
/// The session state machine.
pub mod scroller;
