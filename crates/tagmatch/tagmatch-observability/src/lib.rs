//! # tagmatch-observability
//!
//! Tracing subscriber setup, span macros, and the named events emitted by the
//! similarity and matching crates.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
