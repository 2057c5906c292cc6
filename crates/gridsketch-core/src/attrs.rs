//! Attribute maps for drawables and shape descriptors.
//!
//! Attributes carry both geometry fields (`x1`, `cy`, `r`, `points`) and
//! arbitrary style key/value pairs (`fill`, `stroke`, ...). Values are
//! `serde_json::Value` so callers can attach whatever metadata their
//! surface understands.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An ordered string-to-value attribute map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, Value>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Get an attribute value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get an attribute as a number, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Merge `other` into this map, overwriting existing keys.
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Merged copy: `self` overlaid with `other`.
    pub fn merged(&self, other: &Attributes) -> Attributes {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let attrs = Attributes::new()
            .with("stroke", "black")
            .with("r", 12.5);
        assert_eq!(attrs.number("r"), Some(12.5));
        assert_eq!(attrs.get("stroke").and_then(Value::as_str), Some("black"));
        assert_eq!(attrs.number("stroke"), None);
    }

    #[test]
    fn test_merge_overwrites() {
        let mut base = Attributes::new().with("fill", "red").with("r", 1.0);
        let patch = Attributes::new().with("r", 2.0).with("stroke", "blue");
        base.merge(&patch);
        assert_eq!(base.number("r"), Some(2.0));
        assert_eq!(base.get("fill").and_then(Value::as_str), Some("red"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_serde_round_trip() {
        let attrs = Attributes::new().with("fill", "lime").with("cx", 40.0);
        let json = serde_json::to_string(&attrs).unwrap();
        let back: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(attrs, back);
    }
}
