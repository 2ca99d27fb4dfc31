//! Mapping error type.

/// An error produced while converting a Swagger fragment to JSON Schema.
///
/// [`MappingError::UnsupportedItemType`] is the one construct the converters
/// explicitly reject. The remaining variants are how a malformed fragment
/// surfaces when a required key lookup fails; they are not produced by any
/// extra validation pass.
///
/// # Example
///
/// ```rust
/// use swagger_schema::{to_array_schema, MappingError};
/// use serde_json::json;
///
/// let spec = json!({"type": "array", "items": {"type": "object"}});
/// let err = to_array_schema(spec.as_object().unwrap()).unwrap_err();
///
/// assert_eq!(err, MappingError::UnsupportedItemType("object".to_string()));
/// assert_eq!(err.to_string(), "Item type object not supported");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// The `items` of an array spec declared a type that cannot be converted.
    #[error("Item type {0} not supported")]
    UnsupportedItemType(String),

    /// A primitive spec declared a `type` outside the primitive set.
    #[error("'{0}' is not a swagger primitive type")]
    UnknownPrimitiveType(String),

    /// A top-level spec declared a type with no JSON Schema conversion.
    #[error("Type {0} not supported")]
    UnsupportedType(String),

    /// A key the conversion looks up was absent.
    #[error("missing key '{0}'")]
    MissingKey(&'static str),

    /// The value under the given key was expected to be a mapping.
    #[error("value of '{0}' is not a mapping")]
    NotAMapping(&'static str),
}

// Conversion runs from any thread, errors must cross thread boundaries.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<MappingError>();
    assert_sync::<MappingError>();
};
