use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, BridgeResult};

use super::path::DEFAULT_PATH_DELIMITER;

/// What happens when a non-container value is written over a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContainerOverwritePolicy {
    /// The container is replaced wholesale, like any other overwrite.
    #[default]
    Replace,
    /// The write fails with `PathCollision`.
    Reject,
}

/// Behavior knobs for an option tree.
///
/// Serializable so hosts can keep tree policy alongside their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub container_overwrite: ContainerOverwritePolicy,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            container_overwrite: ContainerOverwritePolicy::default(),
        }
    }
}

impl TreeConfig {
    /// Sets the path delimiter used by `set_option`.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_container_overwrite(mut self, policy: ContainerOverwritePolicy) -> Self {
        self.container_overwrite = policy;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> BridgeResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| BridgeError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> BridgeResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BridgeError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_delimiter() -> char {
    DEFAULT_PATH_DELIMITER
}
