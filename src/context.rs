//! Execution context supplying the attribute bag for a render call.
//!
//! The context owns a mapping from string key to arbitrary JSON value. The
//! renderer treats it as a read-only snapshot for the duration of one call;
//! insertion order is irrelevant because the keys are normalized and ordered
//! by the validator before substitution.

use serde_json::Value;
use std::collections::HashMap;

/// Attribute bag for one render call.
///
/// Keys are expected to be decimal index strings (`"0"`, `"1"`, ...); values
/// may be any JSON value. Validation of the key set happens at render time,
/// not at definition time, so `define` never fails.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    attributes: HashMap<String, Value>,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define an attribute, replacing any previous value under the same
    /// string key. Chainable.
    ///
    /// Note that `define("0", ..)` and `define("00", ..)` create two distinct
    /// entries; that collision is only detected when rendering.
    pub fn define(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The attribute bag, read-only.
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Whether no attributes have been defined.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RenderContext
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
