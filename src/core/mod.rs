//! Option tree and native value primitives shared by builders and the event bridge.

pub mod native;
pub mod node;
pub mod path;
pub mod primitives;
pub mod tree;
pub mod tree_config;
pub mod value;

pub use native::{NativeValue, as_bool, as_double, as_long, as_string, has_value};
pub use node::ConfigNode;
pub use path::{DEFAULT_PATH_DELIMITER, OptionPath};
pub use primitives::{datetime_to_unix_millis, decimal_to_f64};
pub use tree::OptionTree;
pub use tree_config::{ContainerOverwritePolicy, TreeConfig};
pub use value::{ConfigValue, MAX_EXACT_INTEGER, Scalar};
