//! Error types for schema conversion failures.
//!
//! This module provides [`MappingError`], raised when a Swagger fragment cannot
//! be mapped onto an equivalent JSON Schema fragment.

mod mapping_error;

pub use mapping_error::MappingError;
