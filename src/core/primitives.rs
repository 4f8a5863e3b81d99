use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{BridgeError, BridgeResult};

use super::value::ConfigValue;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> BridgeResult<f64> {
    value.to_f64().ok_or_else(|| {
        BridgeError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Engines address datetime axes in epoch milliseconds.
#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

impl From<DateTime<Utc>> for ConfigValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from(datetime_to_unix_millis(value))
    }
}

impl ConfigValue {
    pub fn from_decimal(value: Decimal, field_name: &str) -> BridgeResult<Self> {
        decimal_to_f64(value, field_name).map(Self::from)
    }
}
