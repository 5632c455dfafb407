//! Streaming primitives for shell-first SSR.
//!
//! This crate enforces shell-first streaming patterns:
//! - `StreamingSink` - Platform-controlled streaming
//! - `Shell` - Shell template abstraction

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
