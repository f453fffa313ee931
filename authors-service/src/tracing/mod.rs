//! Tracing and observability module.
//!
//! Provides structured logging and span export for the authors service.

/// Tracer configuration and initialization.
pub mod tracer;
