//! Conversion of Swagger schema fragments into JSON Schema.
//!
//! Swagger's schema dialect is a restricted subset of JSON Schema: array
//! `items` is always a single schema, and only some validation keywords are
//! legal on each primitive type. The converters here filter a fragment down to
//! the keywords JSON Schema accepts for its type, descending into nested
//! array `items`.
//!
//! # Example
//!
//! ```rust
//! use swagger_schema::to_array_schema;
//! use serde_json::json;
//!
//! let spec = json!({
//!     "type": "array",
//!     "items": {"type": "string", "minLength": 2, "collectionFormat": "csv"},
//!     "minItems": 1,
//!     "in": "query"
//! });
//!
//! let schema = to_array_schema(spec.as_object().unwrap()).unwrap();
//! assert_eq!(
//!     serde_json::Value::Object(schema),
//!     json!({
//!         "type": "array",
//!         "items": {"type": "string", "minLength": 2},
//!         "minItems": 1
//!     })
//! );
//! ```

mod convert;
mod keywords;

pub use convert::{to_array_schema, to_json_schema, to_primitive_schema};
pub use keywords::{PrimitiveType, ARRAY_KEYWORDS, BASE_KEYWORDS, SWAGGER_PRIMITIVES};
