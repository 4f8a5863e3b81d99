//! Typed extraction of primitive values from dynamically typed engine data.
//!
//! Every accessor is strict: numbers are never stringified and strings are
//! never parsed. A mismatch surfaces as [`BridgeError::TypeMismatch`] instead
//! of a silent default.

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, BridgeResult};

/// Dynamic value as produced by the engine for one payload field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NativeValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
}

impl NativeValue {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
        }
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T: Into<NativeValue>> From<Option<T>> for NativeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

fn mismatch(field: &str, expected: &'static str, value: Option<&NativeValue>) -> BridgeError {
    BridgeError::TypeMismatch {
        field: field.to_owned(),
        expected,
        found: value.map_or("absent", NativeValue::kind_name),
    }
}

/// Returns the numeric value of `value`.
pub fn as_double(field: &str, value: Option<&NativeValue>) -> BridgeResult<f64> {
    match value {
        Some(NativeValue::Number(number)) => Ok(*number),
        other => Err(mismatch(field, "number", other)),
    }
}

/// Integral view of [`as_double`], truncated toward zero.
pub fn as_long(field: &str, value: Option<&NativeValue>) -> BridgeResult<i64> {
    let number = as_double(field, value)?;
    let truncated = number.trunc();
    // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(BridgeError::TypeMismatch {
            field: field.to_owned(),
            expected: "integral number",
            found: "out-of-range number",
        });
    }
    Ok(truncated as i64)
}

pub fn as_string<'a>(field: &str, value: Option<&'a NativeValue>) -> BridgeResult<&'a str> {
    match value {
        Some(NativeValue::String(text)) => Ok(text),
        other => Err(mismatch(field, "string", other)),
    }
}

pub fn as_bool(field: &str, value: Option<&NativeValue>) -> BridgeResult<bool> {
    match value {
        Some(NativeValue::Boolean(flag)) => Ok(*flag),
        other => Err(mismatch(field, "boolean", other)),
    }
}

/// `true` when the value is present and not null.
#[must_use]
pub fn has_value(value: Option<&NativeValue>) -> bool {
    !matches!(value, None | Some(NativeValue::Null))
}
