//! Typed access to the admin-set listing settings.
//!
//! The settings store hands us a flat string-keyed mapping. Modifiers never
//! index into it directly; they ask for a flag through [`ListingConfiguration::is_active`]
//! or a priority through [`ListingConfiguration::ordering`].

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Priority assumed for a modifier with no explicit ordering.
pub const DEFAULT_ORDERING: i64 = 1;

/// Read-only snapshot of the listing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingConfiguration {
    values: BTreeMap<String, Value>,
}

impl ListingConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }

    /// Build a configuration from an arbitrary JSON value, which must be an
    /// object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(ConfigError::NotAMapping(kind_of(&other).to_string())),
        }
    }

    /// Builder-style insert, mostly useful for fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether the flag stored under `key` is set. Missing keys are off.
    pub fn is_active(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(is_truthy)
    }

    /// Integer priority stored under `key`, or [`DEFAULT_ORDERING`] when the
    /// key is absent.
    ///
    /// A present value that is not an integer is reported rather than
    /// silently replaced by the default.
    pub fn ordering(&self, key: &str) -> Result<i64> {
        match self.values.get(key) {
            None => Ok(DEFAULT_ORDERING),
            Some(value) => {
                value.as_i64().ok_or_else(|| ConfigError::InvalidOrdering {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
        }
    }
}

impl FromIterator<(String, Value)> for ListingConfiguration {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Settings-store truthiness: null, false, zero, and empty strings or
/// collections are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
