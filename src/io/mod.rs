//! Command-line host, configuration, diagnostics and error types

/// Command-line interface driving the library
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Tracing subscriber setup
pub mod logging;
