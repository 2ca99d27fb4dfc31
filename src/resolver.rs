//! Document store for `$ref` resolution.
//!
//! This module provides the [`RefResolver`] type that stores named JSON
//! documents and resolves `$ref` strings against them. It backs the
//! [`JsonRef`](crate::spec::JsonRef) proxies used by the container predicates.

use indexmap::IndexMap;
use parking_lot::RwLock;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Type alias for the document storage map.
type DocumentMap = Arc<RwLock<IndexMap<String, Arc<Value>>>>;

/// A thread-safe store of JSON documents keyed by uri.
///
/// References have the form `uri#/json/pointer`. A reference that starts with
/// `#` is resolved in the document it was found in; at the top level that is
/// the root document, registered under the empty uri `""`.
///
/// # Thread Safety
///
/// The document map sits behind `Arc<RwLock<...>>`. Resolution only takes the
/// read lock, so many proxies may resolve concurrently; registration is
/// serialized. Clones share the same documents.
///
/// # Example
///
/// ```rust
/// use swagger_schema::RefResolver;
/// use serde_json::json;
///
/// let resolver = RefResolver::new();
/// resolver.register("", json!({
///     "definitions": {"Tags": {"type": "array", "items": {"type": "string"}}}
/// })).unwrap();
///
/// let target = resolver.resolve("#/definitions/Tags").unwrap();
/// assert_eq!(target["type"], "array");
/// ```
#[derive(Debug)]
pub struct RefResolver {
    documents: DocumentMap,
    max_depth: usize,
}

impl RefResolver {
    /// Creates a new empty resolver with default max depth (100).
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(IndexMap::new())),
            max_depth: 100,
        }
    }

    /// Sets the maximum number of `$ref`s followed for one resolution.
    ///
    /// Chained references (a target that is itself a `{"$ref": ...}` object)
    /// and references nested inside a target both count. Going deeper than
    /// `depth` fails with [`RefError::MaxDepthExceeded`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use swagger_schema::RefResolver;
    ///
    /// let resolver = RefResolver::new().with_max_depth(8);
    /// assert_eq!(resolver.max_depth(), 8);
    /// ```
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Returns the maximum number of `$ref`s followed for one resolution.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Registers a document under the given uri.
    ///
    /// # Errors
    ///
    /// Returns `RefError::DuplicateDocument` if the uri is already registered.
    pub fn register(&self, uri: impl Into<String>, document: Value) -> Result<(), RefError> {
        let uri = uri.into();
        let mut documents = self.documents.write();

        if documents.contains_key(&uri) {
            return Err(RefError::DuplicateDocument(uri));
        }

        documents.insert(uri, Arc::new(document));
        Ok(())
    }

    /// Retrieves a document by uri.
    pub fn get(&self, uri: &str) -> Option<Arc<Value>> {
        self.documents.read().get(uri).cloned()
    }

    /// Returns the uris of all registered documents, in registration order.
    pub fn documents(&self) -> Vec<String> {
        self.documents.read().keys().cloned().collect()
    }

    /// Resolves a reference to a copy of its target.
    ///
    /// `$ref` objects nested anywhere inside the target are replaced by their
    /// own targets, resolved against the document they appear in. The fragment
    /// is percent-decoded before it is used as a JSON pointer.
    ///
    /// # Errors
    ///
    /// - `RefError::DocumentNotFound` if the uri part names no registered document.
    /// - `RefError::PointerNotFound` if the fragment does not point into the document.
    /// - `RefError::MaxDepthExceeded` if `$ref`s nest or chain deeper than `max_depth`.
    /// - `RefError::CircularReference` if a target contains a reference to itself.
    pub fn resolve(&self, reference: &str) -> Result<Value, RefError> {
        self.resolve_from("", reference, reference, 0, &[])
    }

    /// `expanding` holds the references whose targets enclose the current one.
    fn resolve_from(
        &self,
        base_uri: &str,
        reference: &str,
        origin: &str,
        depth: usize,
        expanding: &[String],
    ) -> Result<Value, RefError> {
        let mut current = reference.to_string();
        let mut base_uri = base_uri.to_string();
        let mut depth = depth;
        let mut expanding = expanding.to_vec();

        loop {
            let (uri, fragment) = split_reference(&current);
            let uri = if uri.is_empty() {
                base_uri.clone()
            } else {
                uri.to_string()
            };
            let not_found = || RefError::PointerNotFound {
                reference: current.clone(),
            };
            let pointer = percent_decode_str(fragment)
                .decode_utf8()
                .map_err(|_| not_found())?;

            let document = self
                .get(&uri)
                .ok_or_else(|| RefError::DocumentNotFound(uri.clone()))?;
            let target = document.pointer(&pointer).ok_or_else(not_found)?;

            let location = format!("{}#{}", uri, pointer);
            if expanding.contains(&location) {
                return Err(RefError::CircularReference {
                    reference: origin.to_string(),
                });
            }
            expanding.push(location);

            match ref_of(target) {
                Some(next) => {
                    depth = self.descend(depth, origin)?;
                    current = next.to_string();
                    base_uri = uri;
                }
                None => {
                    let mut value = target.clone();
                    self.replace_refs(&mut value, &uri, origin, depth, &expanding)?;
                    debug!(reference = origin, depth, "resolved reference");
                    return Ok(value);
                }
            }
        }
    }

    /// Replaces every nested `$ref` object in `value` with its target.
    fn replace_refs(
        &self,
        value: &mut Value,
        base_uri: &str,
        origin: &str,
        depth: usize,
        expanding: &[String],
    ) -> Result<(), RefError> {
        if let Some(reference) = ref_of(value).map(str::to_string) {
            let depth = self.descend(depth, origin)?;
            *value = self.resolve_from(base_uri, &reference, origin, depth, expanding)?;
            return Ok(());
        }

        match value {
            Value::Object(map) => {
                for child in map.values_mut() {
                    self.replace_refs(child, base_uri, origin, depth, expanding)?;
                }
            }
            Value::Array(items) => {
                for child in items {
                    self.replace_refs(child, base_uri, origin, depth, expanding)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Returns `depth + 1`, or an error once it passes `max_depth`.
    fn descend(&self, depth: usize, origin: &str) -> Result<usize, RefError> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(RefError::MaxDepthExceeded {
                reference: origin.to_string(),
                max_depth: self.max_depth,
            });
        }
        Ok(depth)
    }
}

impl Default for RefResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RefResolver {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
            max_depth: self.max_depth,
        }
    }
}

/// Returns the `$ref` string of a reference object, if `value` is one.
pub(crate) fn ref_of(value: &Value) -> Option<&str> {
    value.as_object()?.get("$ref")?.as_str()
}

/// Splits `uri#fragment` into its two halves. A missing `#` means the whole document.
fn split_reference(reference: &str) -> (&str, &str) {
    reference.split_once('#').unwrap_or((reference, ""))
}

/// Errors that can occur while resolving references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefError {
    /// Attempted to register a document under a uri that already exists.
    #[error("document '{0}' already registered")]
    DuplicateDocument(String),

    /// A reference named a document that was never registered.
    #[error("document '{0}' not found")]
    DocumentNotFound(String),

    /// The pointer part of a reference does not exist in its document.
    #[error("reference '{reference}' does not resolve to a value")]
    PointerNotFound { reference: String },

    /// A referenced target contains a reference back to itself.
    #[error("reference '{reference}' is circular")]
    CircularReference { reference: String },

    /// A `$ref` chain was longer than the configured maximum.
    #[error("maximum reference depth {max_depth} exceeded resolving '{reference}'")]
    MaxDepthExceeded { reference: String, max_depth: usize },
}
