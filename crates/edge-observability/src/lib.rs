//! Observability infrastructure for the edge streaming SSR platform.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `LogBuilder` - Fluent structured fields
//! - `LogLevel` / `LogFormat` - Filtering and output selection

mod logging;

pub use logging::*;

// Re-export RequestId and TimingContext from edge-core for convenience
pub use edge_core::{RequestId, TimingContext};
