//! Primitive and array converters.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::keywords::{PrimitiveType, ARRAY_KEYWORDS};
use crate::error::MappingError;
use crate::MappingResult;

/// Converts the Swagger spec of a primitive type into the equivalent JSON
/// Schema object.
///
/// Only the base keys (`name`, `type`, `description`) and the validation
/// keywords JSON Schema supports for the spec's `type` are copied; every other
/// key is dropped. Keys absent from the input stay absent.
///
/// # Errors
///
/// Returns [`MappingError::MissingKey`] if the spec has no `type`, and
/// [`MappingError::UnknownPrimitiveType`] if `type` is not a primitive.
///
/// # Example
///
/// ```rust
/// use swagger_schema::to_primitive_schema;
/// use serde_json::json;
///
/// let spec = json!({"type": "boolean", "pattern": "x", "default": true});
/// let schema = to_primitive_schema(spec.as_object().unwrap()).unwrap();
///
/// assert_eq!(serde_json::Value::Object(schema), json!({"type": "boolean", "default": true}));
/// ```
pub fn to_primitive_schema(
    primitive_spec: &Map<String, Value>,
) -> MappingResult<Map<String, Value>> {
    let primitive_type = match primitive_spec.get("type") {
        Some(Value::String(name)) => name.parse::<PrimitiveType>()?,
        Some(other) => return Err(MappingError::UnknownPrimitiveType(other.to_string())),
        None => return Err(MappingError::MissingKey("type")),
    };
    trace!(primitive_type = %primitive_type, "converting primitive spec");

    Ok(primitive_spec
        .iter()
        .filter(|(key, _)| primitive_type.is_transferable(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

/// Converts the Swagger spec of an array type into the equivalent JSON Schema
/// object.
///
/// The keys `type`, `items`, `minItems`, `maxItems`, `uniqueItems`, `name` and
/// `description` are copied; anything else is dropped. `items` is converted in
/// turn: primitive items through [`to_primitive_schema`], array items through
/// this function, to whatever depth the input nests.
///
/// # Errors
///
/// Returns [`MappingError::UnsupportedItemType`] naming the offending type when
/// `items.type` (at any depth) is neither a primitive nor `array`.
///
/// # Example
///
/// ```rust
/// use swagger_schema::to_array_schema;
/// use serde_json::json;
///
/// let spec = json!({
///     "type": "array",
///     "items": {"type": "array", "items": {"type": "integer", "minimum": 0, "x-nullable": true}}
/// });
/// let schema = to_array_schema(spec.as_object().unwrap()).unwrap();
///
/// assert_eq!(schema["items"]["items"], json!({"type": "integer", "minimum": 0}));
/// ```
pub fn to_array_schema(array_spec: &Map<String, Value>) -> MappingResult<Map<String, Value>> {
    let mut schema = Map::new();

    for (key, value) in array_spec {
        if !ARRAY_KEYWORDS.contains(&key.as_str()) {
            continue;
        }
        let value = if key == "items" {
            convert_items(value)?
        } else {
            value.clone()
        };
        schema.insert(key.clone(), value);
    }

    Ok(schema)
}

/// Converts a spec of any supported type.
///
/// Primitive specs go through [`to_primitive_schema`], array specs through
/// [`to_array_schema`].
///
/// # Errors
///
/// Returns [`MappingError::UnsupportedType`] for objects and every other
/// type without a conversion, and [`MappingError::MissingKey`] if the spec has
/// no `type`.
pub fn to_json_schema(spec: &Map<String, Value>) -> MappingResult<Map<String, Value>> {
    let spec_type = spec.get("type").ok_or(MappingError::MissingKey("type"))?;

    match spec_type.as_str() {
        Some("array") => to_array_schema(spec),
        Some(name) if PrimitiveType::is_primitive(name) => to_primitive_schema(spec),
        _ => Err(MappingError::UnsupportedType(type_name(spec_type))),
    }
}

fn convert_items(items: &Value) -> MappingResult<Value> {
    let items_spec = items.as_object().ok_or(MappingError::NotAMapping("items"))?;
    let items_type = items_spec
        .get("type")
        .ok_or(MappingError::MissingKey("type"))?;

    let converted = match items_type.as_str() {
        Some(name) if PrimitiveType::is_primitive(name) => to_primitive_schema(items_spec)?,
        Some("array") => {
            trace!("descending into nested array items");
            to_array_schema(items_spec)?
        }
        _ => {
            let name = type_name(items_type);
            debug!(item_type = %name, "unsupported array item type");
            return Err(MappingError::UnsupportedItemType(name));
        }
    };

    Ok(Value::Object(converted))
}

/// Renders a `type` value for an error message, unquoted when it is a string.
fn type_name(value: &Value) -> String {
    match value {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_type_name_unquotes_strings() {
        assert_eq!(type_name(&json!("object")), "object");
        assert_eq!(type_name(&json!(["string", "null"])), r#"["string","null"]"#);
    }

    #[test]
    fn test_primitive_output_never_aliases_input() {
        let spec = object(json!({"type": "string", "enum": ["a", "b"]}));
        let mut schema = to_primitive_schema(&spec).unwrap();
        schema.insert("enum".to_string(), json!(["c"]));

        assert_eq!(spec["enum"], json!(["a", "b"]));
    }

    #[test]
    fn test_non_string_primitive_type_fails_lookup() {
        let spec = object(json!({"type": ["string", "null"]}));
        assert_eq!(
            to_primitive_schema(&spec),
            Err(MappingError::UnknownPrimitiveType(r#"["string","null"]"#.to_string()))
        );
    }

    #[test]
    fn test_non_string_item_type_is_unsupported() {
        let spec = object(json!({"type": "array", "items": {"type": 7}}));
        assert_eq!(
            to_array_schema(&spec),
            Err(MappingError::UnsupportedItemType("7".to_string()))
        );
    }

    #[test]
    fn test_tuple_items_are_not_a_mapping() {
        let spec = object(json!({"type": "array", "items": [{"type": "string"}]}));
        assert_eq!(to_array_schema(&spec), Err(MappingError::NotAMapping("items")));
    }
}
