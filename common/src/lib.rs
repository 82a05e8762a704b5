//! Shared building blocks for every `domscout` crate.
//!
//! * [`config`]: the run configuration threaded from the CLI down to probes.
//! * [`domain`]: candidates and the outcomes produced by probing them.
//! * [`error`]: the error type crossing the probe boundary.
//! * [`log`]: status macros rendered by the CLI formatter.

pub mod config;
pub mod domain;
pub mod error;
pub mod log;

#[doc(hidden)]
pub use tracing as __tracing;
