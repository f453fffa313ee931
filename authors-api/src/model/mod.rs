//! Model definitions for the authors service.

/// Author model definitions and utilities.
pub mod author;
/// Error handling and types for the authors service.
pub mod error;
