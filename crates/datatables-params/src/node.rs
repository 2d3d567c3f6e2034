//! Option tree value type.

use serde::Serialize;

use crate::ParamsError;

/// JSON-like option tree. Built with `preserve_order`, so object keys keep
/// their insertion order in the serialized output.
pub type ConfigNode = serde_json::Value;

/// Ordered mapping node.
pub type ConfigMap = serde_json::Map<String, ConfigNode>;

/// Converts any serializable value into a [`ConfigNode`].
///
/// Fails for values JSON cannot represent, e.g. maps keyed by non-strings.
pub fn to_config_node<T: Serialize + ?Sized>(value: &T) -> Result<ConfigNode, ParamsError> {
    Ok(serde_json::to_value(value)?)
}
