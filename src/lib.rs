//! # Swagger Schema
//!
//! Converts fragments of a Swagger 2.0 specification into equivalent JSON
//! Schema fragments, ready to hand to a generic JSON Schema validator.
//!
//! ## Overview
//!
//! Swagger's schema dialect is a restricted subset of JSON Schema. Array
//! `items` is always a single schema rather than a tuple list, and only
//! certain validation keywords are legal per primitive type. This crate
//! filters primitive and array specs down to the keywords JSON Schema accepts
//! for their type, recursing through nested arrays.
//!
//! Fragments may be written in place or reached through a `$ref`. The
//! [`SpecLike`] trait lets the predicates and accessors treat both alike.
//!
//! ## Core Types
//!
//! - [`to_primitive_schema`] / [`to_array_schema`]: the converters
//! - [`MappingError`]: raised for unsupported array item types
//! - [`JsonRef`] / [`RefResolver`]: lazily-resolved `$ref` proxies
//! - [`is_dict_like`] / [`is_list_like`]: container checks through proxies
//!
//! ## Example
//!
//! ```rust
//! use swagger_schema::to_primitive_schema;
//! use serde_json::json;
//!
//! let spec = json!({"type": "string", "minLength": 1, "in": "query"});
//! let schema = to_primitive_schema(spec.as_object().unwrap()).unwrap();
//!
//! assert_eq!(serde_json::Value::Object(schema), json!({"type": "string", "minLength": 1}));
//! ```

pub mod error;
pub mod resolver;
pub mod schema;
pub mod spec;

pub use error::MappingError;
pub use resolver::{RefError, RefResolver};
pub use schema::{
    to_array_schema, to_json_schema, to_primitive_schema, PrimitiveType, ARRAY_KEYWORDS,
    BASE_KEYWORDS, SWAGGER_PRIMITIVES,
};
pub use spec::{
    get_default, get_format, has_default, has_format, is_dict_like, is_list_like, is_required,
    JsonRef, SpecLike, SpecNode,
};

/// Type alias for conversion results.
pub type MappingResult<T> = Result<T, MappingError>;
