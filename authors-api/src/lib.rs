//! Authors API model.
//!
//! Shared types for the authors service and its callers:
//!
//! - Author records, identifiers, and request bodies
//! - Error taxonomy with HTTP status mapping

pub mod model;
