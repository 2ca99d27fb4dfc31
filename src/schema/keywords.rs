//! Keyword allow-lists for Swagger to JSON Schema conversion.
//!
//! Swagger only permits a subset of the JSON Schema validation keywords on each
//! primitive type. The tables here name, per type, the keys that survive
//! conversion.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::MappingError;

/// Keys carried over for every primitive type.
pub const BASE_KEYWORDS: &[&str] = &["name", "type", "description"];

/// Top-level keys carried over from an array spec.
pub const ARRAY_KEYWORDS: &[&str] = &[
    "type",
    "items",
    "minItems",
    "maxItems",
    "uniqueItems",
    "name",
    "description",
];

const STRING_KEYWORDS: &[&str] = &["minLength", "maxLength", "pattern", "format", "enum", "default"];

const NUMERIC_KEYWORDS: &[&str] = &[
    "multipleOf",
    "minimum",
    "maximum",
    "exclusiveMaximum",
    "exclusiveMinimum",
    "enum",
    "default",
    "format",
];

const BOOLEAN_KEYWORDS: &[&str] = &["enum", "default"];

/// The Swagger primitive type names.
pub const SWAGGER_PRIMITIVES: &[&str] = &["integer", "number", "string", "boolean", "null"];

/// A Swagger primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Integer,
    Number,
    Boolean,
    Null,
}

impl PrimitiveType {
    /// Returns the type name as it appears in a spec.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Null => "null",
        }
    }

    /// Returns the validation keywords JSON Schema supports for this type.
    ///
    /// The base keywords ([`BASE_KEYWORDS`]) are not included.
    pub fn validation_keywords(&self) -> &'static [&'static str] {
        match self {
            PrimitiveType::String => STRING_KEYWORDS,
            PrimitiveType::Integer | PrimitiveType::Number => NUMERIC_KEYWORDS,
            PrimitiveType::Boolean => BOOLEAN_KEYWORDS,
            PrimitiveType::Null => &[],
        }
    }

    /// Returns true if `key` survives conversion of a spec of this type.
    pub fn is_transferable(&self, key: &str) -> bool {
        BASE_KEYWORDS.contains(&key) || self.validation_keywords().contains(&key)
    }

    /// Returns true if `name` is one of the Swagger primitive type names.
    pub fn is_primitive(name: &str) -> bool {
        SWAGGER_PRIMITIVES.contains(&name)
    }
}

impl FromStr for PrimitiveType {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(PrimitiveType::String),
            "integer" => Ok(PrimitiveType::Integer),
            "number" => Ok(PrimitiveType::Number),
            "boolean" => Ok(PrimitiveType::Boolean),
            "null" => Ok(PrimitiveType::Null),
            other => Err(MappingError::UnknownPrimitiveType(other.to_string())),
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
