use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{BridgeError, BridgeResult};

use super::node::ConfigNode;

/// Leaf value stored in an option tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

/// One value in an option tree.
///
/// `Null` is an explicit terminal value and is serialized as JSON `null`;
/// an absent key is simply not present in its parent [`ConfigNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Scalar(Scalar),
    Container(ConfigNode),
    Sequence(Vec<ConfigValue>),
}

impl ConfigValue {
    #[must_use]
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container(_))
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    #[must_use]
    pub fn as_container(&self) -> Option<&ConfigNode> {
        match self {
            Self::Container(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(value)) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Number(value)) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Boolean(value)) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::String(_)) => "string",
            Self::Scalar(Scalar::Number(_)) => "number",
            Self::Scalar(Scalar::Boolean(_)) => "boolean",
            Self::Scalar(Scalar::Null) => "null",
            Self::Container(_) => "container",
            Self::Sequence(_) => "sequence",
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Scalar(Scalar::String(value)) => serde_json::Value::String(value.clone()),
            Self::Scalar(Scalar::Number(value)) => number_to_json(*value),
            Self::Scalar(Scalar::Boolean(value)) => serde_json::Value::Bool(*value),
            Self::Scalar(Scalar::Null) => serde_json::Value::Null,
            Self::Container(node) => node.to_json_value(),
            Self::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json_value).collect())
            }
        }
    }
}

/// Integral doubles are emitted as JSON integers so engines see `3`, not `3.0`.
fn integral_as_i64(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn number_to_json(value: f64) -> serde_json::Value {
    if let Some(int) = integral_as_i64(value) {
        return serde_json::Value::from(int);
    }
    serde_json::Number::from_f64(value).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(Scalar::String(value)) => serializer.serialize_str(value),
            Self::Scalar(Scalar::Number(value)) => match integral_as_i64(*value) {
                Some(int) => serializer.serialize_i64(int),
                None if value.is_finite() => serializer.serialize_f64(*value),
                None => serializer.serialize_none(),
            },
            Self::Scalar(Scalar::Boolean(value)) => serializer.serialize_bool(*value),
            Self::Scalar(Scalar::Null) => serializer.serialize_none(),
            Self::Container(node) => node.serialize(serializer),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::null(),
            serde_json::Value::Bool(value) => Self::Scalar(Scalar::Boolean(value)),
            serde_json::Value::Number(number) => {
                number.as_f64().map_or_else(Self::null, Self::from)
            }
            serde_json::Value::String(value) => Self::Scalar(Scalar::String(value)),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Container(ConfigNode::from_json_map(map)),
        }
    }
}

impl From<Scalar> for ConfigValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<ConfigNode> for ConfigValue {
    fn from(value: ConfigNode) -> Self {
        Self::Container(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Boolean(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Number(value))
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConfigValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Scalar::Number(value as f64))
                }
            }
        )*
    };
}

impl_from_number!(f32, i8, i16, i32, u8, u16, u32);

// Magnitudes above `MAX_EXACT_INTEGER` round to the nearest f64. Use
// `ConfigValue::exact_integer` where rounding must be an error.
impl_from_number!(i64, u64, usize);

/// Largest integer magnitude an engine number holds without rounding.
pub const MAX_EXACT_INTEGER: i64 = (1 << 53) - 1;

impl ConfigValue {
    /// Number from `value`, failing instead of rounding past 2^53 - 1.
    pub fn exact_integer(value: i64) -> BridgeResult<Self> {
        if value.unsigned_abs() > MAX_EXACT_INTEGER.unsigned_abs() {
            return Err(BridgeError::InvalidData(format!(
                "integer {value} is not exactly representable as an engine number"
            )));
        }
        Ok(Self::from(value))
    }
}

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConfigValue> + Clone> From<&[T]> for ConfigValue {
    fn from(values: &[T]) -> Self {
        Self::Sequence(values.iter().cloned().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigValue, MAX_EXACT_INTEGER, Scalar};
    use crate::error::BridgeError;

    #[test]
    fn exact_integer_refuses_values_that_would_round() {
        let edge = ConfigValue::exact_integer(MAX_EXACT_INTEGER).expect("edge fits");
        assert_eq!(serde_json::to_string(&edge).expect("json"), "9007199254740991");
        assert!(ConfigValue::exact_integer(-MAX_EXACT_INTEGER).is_ok());

        let nanos = 1_700_000_000_123_456_789_i64;
        let err = ConfigValue::exact_integer(nanos).expect_err("nanoseconds round");
        assert!(matches!(err, BridgeError::InvalidData(_)));
        assert!(ConfigValue::exact_integer(i64::MIN).is_err());
    }

    #[test]
    fn integral_numbers_serialize_without_fraction() {
        let json = serde_json::to_string(&ConfigValue::from(vec![3.0, 2.5, -4.0])).expect("json");
        assert_eq!(json, "[3,2.5,-4]");
    }

    #[test]
    fn non_finite_numbers_serialize_as_null() {
        let json = serde_json::to_string(&ConfigValue::from(f64::NAN)).expect("json");
        assert_eq!(json, "null");
    }

    #[test]
    fn none_becomes_explicit_null() {
        let value = ConfigValue::from(None::<&str>);
        assert!(value.is_null());
        assert_eq!(value, ConfigValue::Scalar(Scalar::Null));
    }

    #[test]
    fn json_values_map_onto_tagged_variants() {
        let value = ConfigValue::from(serde_json::json!({
            "enabled": true,
            "stops": [[0, "#fff"], [1, "#000"]],
        }));
        let node = value.as_container().expect("container");
        assert_eq!(node.get("enabled").and_then(ConfigValue::as_bool), Some(true));
        let stops = node.get("stops").and_then(ConfigValue::as_sequence).expect("stops");
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].as_sequence().map(<[ConfigValue]>::len), Some(2));
    }
}
