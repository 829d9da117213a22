//! Base message template merged into every outgoing message.

use serde_json::{Map, Value};

use super::StructuredMessage;

/// Process-wide defaults for outgoing messages, e.g. `channel` or `username`.
///
/// The template only supplies defaults: a key already set by the formatter
/// keeps the formatter's value, nested objects merge key by key, and arrays
/// (such as `attachments`) merge element by element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTemplate {
    base: Map<String, Value>,
}

impl MessageTemplate {
    /// Creates a template from a JSON object.
    #[must_use]
    pub const fn new(base: Map<String, Value>) -> Self {
        Self { base }
    }

    /// Creates a template from an arbitrary JSON value.
    ///
    /// Returns `None` unless the value is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(base) => Some(Self::new(base)),
            _ => None,
        }
    }

    /// Returns true if the template has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Returns the number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Returns the template's top-level object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.base
    }

    /// Serializes a message and fills in the template's defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be serialized.
    pub fn apply(&self, message: &StructuredMessage) -> Result<Value, serde_json::Error> {
        let mut payload = serde_json::to_value(message)?;
        if let Value::Object(target) = &mut payload {
            merge_defaults(target, &self.base);
        }
        Ok(payload)
    }
}

/// Copies every key of `defaults` that `target` lacks, recursing into objects
/// and arrays present on both sides.
pub fn merge_defaults(target: &mut Map<String, Value>, defaults: &Map<String, Value>) {
    for (key, default) in defaults {
        match target.get_mut(key) {
            Some(existing) => fill_defaults(existing, default),
            None => {
                target.insert(key.clone(), default.clone());
            }
        }
    }
}

/// Arrays merge index by index; template elements past the end of the
/// message's array are appended. Any other pairing keeps `target`.
fn fill_defaults(target: &mut Value, default: &Value) {
    match (target, default) {
        (Value::Object(existing), Value::Object(nested)) => merge_defaults(existing, nested),
        (Value::Array(existing), Value::Array(nested)) => {
            for (index, element) in nested.iter().enumerate() {
                match existing.get_mut(index) {
                    Some(slot) => fill_defaults(slot, element),
                    None => existing.push(element.clone()),
                }
            }
        }
        _ => {}
    }
}
