//! # dialectic
//!
//! CLI and HTTP surface over `dialectic-core`. The binary in `main.rs` is a
//! thin entry point; everything reachable from it lives here so the
//! integration tests can drive the router directly.

pub mod api;
pub mod cli;
pub mod config;
