//! Navigation over spec fragments that may be inline values or `$ref` proxies.
//!
//! A fragment of a Swagger document is either a value written in place or a
//! [`JsonRef`] standing in for the target of a `$ref`. The [`SpecLike`] trait
//! erases that difference, so the predicates and accessors in this module
//! treat both uniformly.
//!
//! # Example
//!
//! ```rust
//! use swagger_schema::{is_dict_like, is_list_like, JsonRef, RefResolver};
//! use serde_json::json;
//!
//! let resolver = RefResolver::new();
//! resolver.register("", json!({"definitions": {"Pet": {"type": "string"}}})).unwrap();
//!
//! assert!(is_dict_like(&json!({"type": "string"})));
//! assert!(is_dict_like(&JsonRef::new("#/definitions/Pet", &resolver)));
//! assert!(!is_list_like(&json!("string")));
//! ```

mod json_ref;

use serde_json::Value;
use tracing::debug;

use crate::resolver::{ref_of, RefResolver};

pub use json_ref::JsonRef;

/// A spec fragment that can be navigated as a JSON value.
///
/// Implemented by inline values and by reference proxies. `target` returns the
/// value to navigate, or `None` when a proxy cannot be resolved.
pub trait SpecLike {
    /// Returns the value this fragment stands for.
    fn target(&self) -> Option<&Value>;
}

impl SpecLike for Value {
    fn target(&self) -> Option<&Value> {
        Some(self)
    }
}

impl SpecLike for JsonRef {
    fn target(&self) -> Option<&Value> {
        match self.subject() {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(reference = self.reference(), error = %err, "unresolvable reference");
                None
            }
        }
    }
}

impl<T: SpecLike + ?Sized> SpecLike for &T {
    fn target(&self) -> Option<&Value> {
        (**self).target()
    }
}

/// A spec fragment held either inline or behind a `$ref` proxy.
#[derive(Debug, Clone)]
pub enum SpecNode {
    /// A value written in place.
    Inline(Value),
    /// A `$ref` whose target is resolved on demand.
    Ref(JsonRef),
}

impl SpecNode {
    /// Wraps a `{"$ref": ...}` object as a proxy and keeps anything else inline.
    pub fn from_value(value: Value, resolver: &RefResolver) -> Self {
        match ref_of(&value) {
            Some(reference) => SpecNode::Ref(JsonRef::new(reference, resolver)),
            None => SpecNode::Inline(value),
        }
    }

    /// Returns true if this node is a reference proxy.
    pub fn is_ref(&self) -> bool {
        matches!(self, SpecNode::Ref(_))
    }
}

impl SpecLike for SpecNode {
    fn target(&self) -> Option<&Value> {
        match self {
            SpecNode::Inline(value) => value.target(),
            SpecNode::Ref(proxy) => proxy.target(),
        }
    }
}

/// Returns true if `spec` is a mapping, or a proxy whose target is one.
pub fn is_dict_like<S: SpecLike + ?Sized>(spec: &S) -> bool {
    spec.target().is_some_and(Value::is_object)
}

/// Returns true if `spec` is a sequence, or a proxy whose target is one.
pub fn is_list_like<S: SpecLike + ?Sized>(spec: &S) -> bool {
    spec.target().is_some_and(Value::is_array)
}

/// Returns true if the spec has a `default` key.
pub fn has_default<S: SpecLike + ?Sized>(spec: &S) -> bool {
    get_default(spec).is_some()
}

/// Returns the spec's `default`, or `None` if it has none.
pub fn get_default<S: SpecLike + ?Sized>(spec: &S) -> Option<&Value> {
    spec.target()?.get("default")
}

/// Returns true if the spec has a `required` key.
///
/// Only the presence of the key is tested; `"required": false` still counts.
pub fn is_required<S: SpecLike + ?Sized>(spec: &S) -> bool {
    spec.target()
        .is_some_and(|value| value.get("required").is_some())
}

/// Returns true if the spec has a `format` key.
pub fn has_format<S: SpecLike + ?Sized>(spec: &S) -> bool {
    get_format(spec).is_some()
}

/// Returns the spec's `format`, or `None` if it has none.
pub fn get_format<S: SpecLike + ?Sized>(spec: &S) -> Option<&Value> {
    spec.target()?.get("format")
}
