use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::native::{self, NativeValue};
use crate::error::{BridgeError, BridgeResult};

/// Read access to named dynamic fields with strict typed accessors.
pub trait NativeFields {
    fn field(&self, name: &str) -> Option<&NativeValue>;

    fn double(&self, name: &str) -> BridgeResult<f64> {
        native::as_double(name, self.field(name))
    }

    fn long(&self, name: &str) -> BridgeResult<i64> {
        native::as_long(name, self.field(name))
    }

    fn string(&self, name: &str) -> BridgeResult<&str> {
        native::as_string(name, self.field(name))
    }

    fn boolean(&self, name: &str) -> BridgeResult<bool> {
        native::as_bool(name, self.field(name))
    }

    fn has(&self, name: &str) -> bool {
        native::has_value(self.field(name))
    }
}

/// Flat field table for one native event or entity.
///
/// Nested engine objects are flattened with `.` separated keys
/// (`{"chartX": 1, "target": {"id": "a"}}` yields `chartX` and `target.id`);
/// arrays are dropped because no accessor can address them.
///
/// A literal dotted key and a nested object can flatten to the same name
/// (`"target.id"` and `{"target": {"id": ..}}`); the one later in document
/// order wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NativePayload {
    fields: IndexMap<String, NativeValue>,
}

impl NativePayload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<NativeValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<NativeValue>) {
        self.fields.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Converts an engine JSON object once at the boundary.
    pub fn from_json(value: &serde_json::Value) -> BridgeResult<Self> {
        let serde_json::Value::Object(map) = value else {
            return Err(BridgeError::InvalidPayload(format!(
                "expected event object, found {value}"
            )));
        };
        let mut payload = Self::new();
        flatten_into(&mut payload, None, map);
        Ok(payload)
    }

    pub fn from_json_str(input: &str) -> BridgeResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            BridgeError::InvalidPayload(format!("failed to parse event payload: {e}"))
        })?;
        Self::from_json(&value)
    }
}

fn flatten_into(
    payload: &mut NativePayload,
    prefix: Option<&str>,
    map: &serde_json::Map<String, serde_json::Value>,
) {
    for (key, value) in map {
        let name = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        if !value.is_object() && payload.fields.contains_key(&name) {
            trace!(field = %name, "later payload field overrides an earlier one");
        }
        match value {
            serde_json::Value::Null => payload.insert(name, NativeValue::Null),
            serde_json::Value::Bool(flag) => payload.insert(name, *flag),
            serde_json::Value::Number(number) => match number.as_f64() {
                Some(number) => payload.insert(name, number),
                None => payload.insert(name, NativeValue::Null),
            },
            serde_json::Value::String(text) => payload.insert(name, text.as_str()),
            serde_json::Value::Object(inner) => flatten_into(payload, Some(&name), inner),
            serde_json::Value::Array(_) => trace!(field = %name, "skipping array payload field"),
        }
    }
}

impl NativeFields for NativePayload {
    fn field(&self, name: &str) -> Option<&NativeValue> {
        self.fields.get(name)
    }
}
