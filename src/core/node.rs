use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{BridgeError, BridgeResult};

use super::path::OptionPath;
use super::tree_config::ContainerOverwritePolicy;
use super::value::ConfigValue;

/// One level of an option tree: ordered `key -> value` entries.
///
/// Insertion order carries no meaning for the engine but is preserved so
/// serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigNode {
    entries: IndexMap<String, ConfigValue>,
}

impl ConfigNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Sets a direct child, replacing any previous value wholesale.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Reads the value stored at `path`, if every segment resolves.
    #[must_use]
    pub fn lookup(&self, path: &OptionPath) -> Option<&ConfigValue> {
        let (parents, terminal) = path.split_terminal();
        let mut node = self;
        for segment in parents {
            node = node.get(segment)?.as_container()?;
        }
        node.get(terminal)
    }

    /// Mutable counterpart of [`ConfigNode::lookup`]. Edits through it bypass
    /// the container overwrite policy.
    pub fn lookup_mut(&mut self, path: &OptionPath) -> Option<&mut ConfigValue> {
        let (parents, terminal) = path.split_terminal();
        let mut node = self;
        for segment in parents {
            node = match node.entries.get_mut(segment)? {
                ConfigValue::Container(inner) => inner,
                _ => return None,
            };
        }
        node.entries.get_mut(terminal)
    }

    /// Writes `value` at `path`, creating intermediate containers.
    ///
    /// Intermediate containers are never replaced. Descending through a
    /// scalar or sequence is a [`BridgeError::PathCollision`] and leaves the
    /// tree untouched.
    pub fn set_at(
        &mut self,
        path: &OptionPath,
        value: ConfigValue,
        overwrite: ContainerOverwritePolicy,
    ) -> BridgeResult<()> {
        let (parents, terminal) = path.split_terminal();
        self.check_descent(path, parents)?;

        let mut node = self;
        for segment in parents {
            let child = node
                .entries
                .entry(segment.clone())
                .or_insert_with(|| ConfigValue::Container(ConfigNode::new()));
            node = match child {
                ConfigValue::Container(inner) => inner,
                _ => return Err(collision(path, segment)),
            };
        }

        if overwrite == ContainerOverwritePolicy::Reject
            && !value.is_container()
            && node.get(terminal).is_some_and(ConfigValue::is_container)
        {
            return Err(collision(path, terminal));
        }
        node.entries.insert(terminal.to_owned(), value);
        Ok(())
    }

    /// Removes and returns the value at `path`; intermediate containers stay.
    pub fn remove_at(&mut self, path: &OptionPath) -> Option<ConfigValue> {
        let (parents, terminal) = path.split_terminal();
        let mut node = self;
        for segment in parents {
            node = match node.entries.get_mut(segment)? {
                ConfigValue::Container(inner) => inner,
                _ => return None,
            };
        }
        node.entries.shift_remove(terminal)
    }

    // Walks the existing prefix read-only first so a failing write never
    // leaves freshly created empty containers behind.
    fn check_descent(&self, path: &OptionPath, parents: &[String]) -> BridgeResult<()> {
        let mut node = self;
        for segment in parents {
            match node.get(segment) {
                None => return Ok(()),
                Some(ConfigValue::Container(inner)) => node = inner,
                Some(_) => return Err(collision(path, segment)),
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json_value()))
                .collect(),
        )
    }

    pub fn to_json_pretty(&self) -> BridgeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BridgeError::InvalidData(format!("failed to serialize options: {e}")))
    }

    pub fn from_json_str(input: &str) -> BridgeResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BridgeError::InvalidData(format!("failed to parse options: {e}")))
    }

    pub(crate) fn from_json_map(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (key, ConfigValue::from(value)))
                .collect(),
        }
    }
}

fn collision(path: &OptionPath, segment: &str) -> BridgeError {
    BridgeError::PathCollision {
        path: path.to_string(),
        segment: segment.to_owned(),
    }
}

impl Serialize for ConfigNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConfigNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Object(map) => Ok(Self::from_json_map(map)),
            other => Err(de::Error::custom(format!(
                "expected options object, found {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigNode;
    use crate::core::path::OptionPath;
    use crate::core::tree_config::ContainerOverwritePolicy;
    use crate::core::value::ConfigValue;
    use crate::error::BridgeError;

    fn path(raw: &str) -> OptionPath {
        OptionPath::parse(raw).expect("valid path")
    }

    #[test]
    fn failed_descent_leaves_no_partial_containers() {
        let mut node = ConfigNode::new();
        node.set_at(&path("a"), 1.into(), ContainerOverwritePolicy::Replace)
            .expect("scalar");

        let err = node
            .set_at(&path("a/b/c"), 2.into(), ContainerOverwritePolicy::Replace)
            .expect_err("must collide");
        assert!(matches!(err, BridgeError::PathCollision { ref segment, .. } if segment == "a"));
        assert_eq!(node.len(), 1);
        assert_eq!(node.get("a"), Some(&ConfigValue::from(1)));
    }

    #[test]
    fn sequences_cannot_be_descended_into() {
        let mut node = ConfigNode::new();
        node.set_at(&path("stops"), vec![0, 1].into(), ContainerOverwritePolicy::Replace)
            .expect("sequence");
        let err = node
            .set_at(&path("stops/0"), 5.into(), ContainerOverwritePolicy::Replace)
            .expect_err("must collide");
        assert!(matches!(err, BridgeError::PathCollision { .. }));
    }

    #[test]
    fn remove_keeps_intermediate_containers() {
        let mut node = ConfigNode::new();
        node.set_at(&path("a/b"), true.into(), ContainerOverwritePolicy::Replace)
            .expect("set");
        assert_eq!(node.remove_at(&path("a/b")), Some(ConfigValue::from(true)));
        assert!(node.lookup(&path("a")).is_some_and(ConfigValue::is_container));
        assert_eq!(node.remove_at(&path("a/b")), None);
    }

    #[test]
    fn lookup_mut_stops_at_non_containers() {
        let mut node = ConfigNode::new();
        node.set_at(&path("a/b"), 1.into(), ContainerOverwritePolicy::Replace)
            .expect("set");
        if let Some(value) = node.lookup_mut(&path("a/b")) {
            *value = ConfigValue::from("edited");
        }
        assert_eq!(node.lookup(&path("a/b")).and_then(ConfigValue::as_str), Some("edited"));
        assert!(node.lookup_mut(&path("a/b/c")).is_none());
        assert!(node.lookup_mut(&path("missing/b")).is_none());
    }

    #[test]
    fn json_preserves_insertion_order() {
        let mut node = ConfigNode::new();
        node.insert("zeta", 1);
        node.insert("alpha", 2);
        let json = serde_json::to_string(&node).expect("json");
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);

        let restored = ConfigNode::from_json_str(&json).expect("parse");
        assert_eq!(restored.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn non_object_json_is_rejected() {
        let err = ConfigNode::from_json_str("[1,2]").expect_err("array is not a node");
        assert!(matches!(err, BridgeError::InvalidData(_)));
    }
}
