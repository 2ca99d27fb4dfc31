//! Lazily-dereferencing `$ref` proxy.
//!
//! This module provides [`JsonRef`], which stands in for the target of a `$ref`
//! until something needs to look at it.

use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::resolver::{RefError, RefResolver};

/// A proxy for the target of a `$ref`.
///
/// The reference is resolved through a [`RefResolver`] the first time
/// [`subject`](JsonRef::subject) is called. A successful resolution is cached
/// for the life of the proxy; a failed one is attempted again on the next
/// access, so registering the missing document later makes the proxy usable.
///
/// # Example
///
/// ```rust
/// use swagger_schema::{JsonRef, RefResolver};
/// use serde_json::json;
///
/// let resolver = RefResolver::new();
/// resolver.register("", json!({"definitions": {"Id": {"type": "integer"}}})).unwrap();
///
/// let proxy = JsonRef::new("#/definitions/Id", &resolver);
/// assert!(!proxy.is_resolved());
///
/// assert_eq!(proxy.subject().unwrap()["type"], "integer");
/// assert!(proxy.is_resolved());
/// ```
#[derive(Debug, Clone)]
pub struct JsonRef {
    reference: String,
    resolver: RefResolver,
    subject: OnceCell<Value>,
}

impl JsonRef {
    /// Creates an unresolved proxy for `reference`.
    pub fn new(reference: impl Into<String>, resolver: &RefResolver) -> Self {
        Self {
            reference: reference.into(),
            resolver: resolver.clone(),
            subject: OnceCell::new(),
        }
    }

    /// Returns the `$ref` string this proxy stands for.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns true once the target has been resolved successfully.
    pub fn is_resolved(&self) -> bool {
        self.subject.get().is_some()
    }

    /// Returns the dereferenced target, resolving it on first access.
    ///
    /// # Errors
    ///
    /// Returns the [`RefError`] the resolver produced. Nothing is cached on
    /// failure.
    pub fn subject(&self) -> Result<&Value, RefError> {
        self.subject
            .get_or_try_init(|| self.resolver.resolve(&self.reference))
    }
}
