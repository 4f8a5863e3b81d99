use tracing::{trace, warn};

use crate::error::{BridgeError, BridgeResult};

use super::node::ConfigNode;
use super::path::OptionPath;
use super::tree_config::TreeConfig;
use super::value::ConfigValue;

/// Root of one builder's options plus the policy used to write into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionTree {
    config: TreeConfig,
    root: ConfigNode,
}

impl OptionTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            config,
            root: ConfigNode::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Borrowed view of the live tree.
    #[must_use]
    pub fn root(&self) -> &ConfigNode {
        &self.root
    }

    pub fn parse_path(&self, raw: &str) -> BridgeResult<OptionPath> {
        OptionPath::parse_with_delimiter(raw, self.config.delimiter)
    }

    pub fn set_option(
        &mut self,
        path: &str,
        value: impl Into<ConfigValue>,
    ) -> BridgeResult<&mut Self> {
        let parsed = self.parse_path(path)?;
        self.set_at(&parsed, value.into())?;
        Ok(self)
    }

    /// Writes a `/`-spelled path regardless of the configured delimiter.
    pub fn set_fixed(
        &mut self,
        path: &str,
        value: impl Into<ConfigValue>,
    ) -> BridgeResult<&mut Self> {
        let parsed = OptionPath::parse(path)?;
        self.set_at(&parsed, value.into())?;
        Ok(self)
    }

    pub fn set_at(&mut self, path: &OptionPath, value: ConfigValue) -> BridgeResult<()> {
        trace!(path = %path, kind = value.kind_name(), "set option");
        self.root
            .set_at(path, value, self.config.container_overwrite)
            .inspect_err(|err| warn!(error = %err, "rejected option write"))
    }

    /// Appends to the sequence at `path` in place, creating it when absent.
    pub fn push_option(&mut self, path: &str, value: impl Into<ConfigValue>) -> BridgeResult<()> {
        let parsed = self.parse_path(path)?;
        let value = value.into();
        match self.root.lookup_mut(&parsed) {
            Some(ConfigValue::Sequence(items)) => {
                items.push(value);
                trace!(path = %parsed, len = items.len(), "append option");
                Ok(())
            }
            Some(_) => {
                let (_, terminal) = parsed.split_terminal();
                let err = BridgeError::PathCollision {
                    path: parsed.to_string(),
                    segment: terminal.to_owned(),
                };
                warn!(error = %err, "rejected option append");
                Err(err)
            }
            None => self.set_at(&parsed, ConfigValue::Sequence(vec![value])),
        }
    }

    /// Reads a value back; unparsable paths read as absent.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ConfigValue> {
        let parsed = self.parse_path(path).ok()?;
        self.root.lookup(&parsed)
    }

    /// Direct mutable access for in-place edits of existing values.
    pub(crate) fn get_mut(&mut self, path: &str) -> Option<&mut ConfigValue> {
        let parsed = self.parse_path(path).ok()?;
        self.root.lookup_mut(&parsed)
    }

    pub fn remove_option(&mut self, path: &str) -> BridgeResult<Option<ConfigValue>> {
        let parsed = self.parse_path(path)?;
        trace!(path = %parsed, "remove option");
        Ok(self.root.remove_at(&parsed))
    }

    /// Deep-copied snapshot; later writes never show up in it.
    #[must_use]
    pub fn get_options(&self) -> ConfigNode {
        self.root.clone()
    }
}
