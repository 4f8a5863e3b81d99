use serde::{Deserialize, Serialize};

use crate::core::ConfigNode;
use crate::error::{BridgeError, BridgeResult};

use super::option_builder::OptionBuilder;

pub const OPTIONS_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub options: ConfigNode,
}

impl ConfigNode {
    pub fn to_json_contract_v1_pretty(&self) -> BridgeResult<String> {
        let payload = OptionsSnapshotJsonContractV1 {
            schema_version: OPTIONS_SNAPSHOT_JSON_SCHEMA_V1,
            options: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            BridgeError::InvalidData(format!("failed to serialize options contract v1: {e}"))
        })
    }

    /// Accepts either a bare options object or a versioned contract.
    pub fn from_json_compat_str(input: &str) -> BridgeResult<Self> {
        if let Ok(payload) = serde_json::from_str::<OptionsSnapshotJsonContractV1>(input) {
            if payload.schema_version != OPTIONS_SNAPSHOT_JSON_SCHEMA_V1 {
                return Err(BridgeError::InvalidData(format!(
                    "unsupported options schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.options);
        }
        Self::from_json_str(input)
    }
}

/// Versioned snapshot of any builder's options.
pub fn snapshot_json_contract_v1_pretty(builder: &impl OptionBuilder) -> BridgeResult<String> {
    builder.get_options().to_json_contract_v1_pretty()
}
