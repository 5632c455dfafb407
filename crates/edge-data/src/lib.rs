//! Data access layer with dependency tagging.
//!
//! This crate provides:
//! - `FetchClient` - Single-attempt platform fetch with JSON decoding
//! - `DependencyTag` - Semantic dependency categories
//! - `FetchError` - Typed fetch failures

mod client;
mod dependency;

pub use client::*;
pub use dependency::*;
