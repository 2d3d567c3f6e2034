//! Widget initialisation options with DataTables defaults applied.

use crate::{ConfigMap, ConfigNode};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    attributes: ConfigMap,
}

impl Default for Parameters {
    fn default() -> Self {
        let mut attributes = ConfigMap::new();
        attributes.insert("serverSide".into(), ConfigNode::Bool(true));
        attributes.insert("processing".into(), ConfigNode::Bool(true));
        attributes.insert("ajax".into(), ConfigNode::String(String::new()));
        attributes.insert("columns".into(), ConfigNode::Array(Vec::new()));
        Self { attributes }
    }
}

impl Parameters {
    /// Overlays `attributes` on the defaults. Default keys keep their
    /// position; new keys are appended in the given order.
    pub fn new(attributes: ConfigMap) -> Self {
        let mut params = Self::default();
        for (key, value) in attributes {
            params.set(key, value);
        }
        params
    }

    /// The option stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.attributes.get(key)
    }

    /// Sets or replaces one option.
    pub fn set(&mut self, key: impl Into<String>, value: ConfigNode) {
        self.attributes.insert(key.into(), value);
    }

    /// All options, defaults first.
    pub fn as_map(&self) -> &ConfigMap {
        &self.attributes
    }

    /// The options as an object node.
    pub fn into_node(self) -> ConfigNode {
        ConfigNode::Object(self.attributes)
    }
}

impl From<ConfigMap> for Parameters {
    fn from(attributes: ConfigMap) -> Self {
        Self::new(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        assert_eq!(
            Parameters::default().into_node(),
            json!({"serverSide": true, "processing": true, "ajax": "", "columns": []})
        );
    }

    #[test]
    fn overrides_keep_default_order() {
        let ConfigNode::Object(attrs) = json!({"dom": "Bfrtip", "serverSide": false, "ajax": "/users"})
        else {
            unreachable!()
        };
        let node = Parameters::new(attrs).into_node();
        let keys: Vec<&String> = node.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["serverSide", "processing", "ajax", "columns", "dom"]);
        assert_eq!(node["serverSide"], json!(false));
        assert_eq!(node["ajax"], json!("/users"));
    }
}
