use tracing::debug;

use crate::core::{ConfigNode, ConfigValue, OptionTree};
use crate::error::BridgeResult;

/// Fluent facade over one owned [`OptionTree`].
///
/// Concrete builders only provide access to their tree; every typed setter
/// is a single write to a fixed path.
pub trait OptionBuilder {
    fn tree(&self) -> &OptionTree;

    fn tree_mut(&mut self) -> &mut OptionTree;

    fn set_option(&mut self, path: &str, value: impl Into<ConfigValue>) -> BridgeResult<&mut Self>
    where
        Self: Sized,
    {
        self.tree_mut().set_option(path, value)?;
        Ok(self)
    }

    /// Writes a `/`-spelled path; typed setters go through here so they work
    /// under any configured delimiter.
    fn set_fixed_option(
        &mut self,
        path: &str,
        value: impl Into<ConfigValue>,
    ) -> BridgeResult<&mut Self>
    where
        Self: Sized,
    {
        self.tree_mut().set_fixed(path, value)?;
        Ok(self)
    }

    /// Copies `nested`'s current options under `path`.
    ///
    /// Later changes to `nested` are not seen by `self`; call again to
    /// refresh.
    fn set_nested<B: OptionBuilder>(&mut self, path: &str, nested: &B) -> BridgeResult<&mut Self>
    where
        Self: Sized,
    {
        let snapshot = nested.get_options();
        debug!(path, keys = snapshot.len(), "absorb nested options");
        self.set_fixed_option(path, ConfigValue::Container(snapshot))
    }

    fn get_option(&self, path: &str) -> Option<&ConfigValue> {
        self.tree().get(path)
    }

    fn remove_option(&mut self, path: &str) -> BridgeResult<Option<ConfigValue>> {
        self.tree_mut().remove_option(path)
    }

    /// Deep-copied snapshot of the current options.
    fn get_options(&self) -> ConfigNode {
        self.tree().get_options()
    }

    fn to_json_value(&self) -> serde_json::Value {
        self.tree().root().to_json_value()
    }
}

/// Generates typed setters that write one fixed path each.
macro_rules! option_setters {
    ($($(#[$meta:meta])* $name:ident($path:literal, $ty:ty);)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, value: $ty) -> $crate::error::BridgeResult<&mut Self> {
                $crate::api::OptionBuilder::set_fixed_option(self, $path, value)
            }
        )*
    };
}

pub(crate) use option_setters;

/// Generates `set_*_event_handler` methods writing into a registration table.
macro_rules! event_handler_setters {
    ($field:ident { $($(#[$meta:meta])* $name:ident => $kind:ident;)* }) => {
        $(
            $(#[$meta])*
            pub fn $name<F>(&mut self, handler: F) -> &mut Self
            where
                F: Fn(&$crate::interaction::EventView<'_>) -> $crate::error::BridgeResult<bool>
                    + 'static,
            {
                self.$field.set(
                    $crate::interaction::EventKind::$kind,
                    Some($crate::interaction::event_handler(handler)),
                );
                self
            }
        )*
    };
}

pub(crate) use event_handler_setters;

#[cfg(test)]
mod tests {
    use super::OptionBuilder;
    use crate::core::{ConfigValue, OptionTree};

    #[derive(Default)]
    struct Probe {
        tree: OptionTree,
    }

    impl OptionBuilder for Probe {
        fn tree(&self) -> &OptionTree {
            &self.tree
        }

        fn tree_mut(&mut self) -> &mut OptionTree {
            &mut self.tree
        }
    }

    impl Probe {
        option_setters! {
            set_enabled("enabled", bool);
            set_font_weight("style/fontWeight", &str);
        }
    }

    #[test]
    fn generated_setters_chain() {
        let mut probe = Probe::default();
        probe
            .set_enabled(true)
            .and_then(|p| p.set_font_weight("bold"))
            .expect("setters");
        assert_eq!(probe.get_option("enabled").and_then(ConfigValue::as_bool), Some(true));
        assert_eq!(
            probe.get_option("style/fontWeight").and_then(ConfigValue::as_str),
            Some("bold")
        );
    }

    #[test]
    fn nested_builder_is_copied_not_aliased() {
        let mut child = Probe::default();
        child.set_enabled(true).expect("child");

        let mut parent = Probe::default();
        parent.set_nested("marker", &child).expect("nest");
        child.set_enabled(false).expect("child update");

        assert_eq!(
            parent.get_option("marker/enabled").and_then(ConfigValue::as_bool),
            Some(true)
        );
    }
}
