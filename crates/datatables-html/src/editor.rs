//! DataTables Editor instances attached to a table.

use datatables_params::{ConfigMap, ConfigNode};

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub label: String,
    /// Editor field type (`text`, `select`, ...). Omitted when `None`.
    pub kind: Option<String>,
    pub extra: ConfigMap,
}

impl Field {
    /// A field bound to `name`.
    pub fn make(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: None,
            extra: ConfigMap::new(),
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: ConfigNode) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The field's options object.
    pub fn to_node(&self) -> ConfigNode {
        let mut map = ConfigMap::new();
        map.insert("name".into(), self.name.clone().into());
        map.insert("label".into(), self.label.clone().into());
        if let Some(kind) = &self.kind {
            map.insert("type".into(), kind.clone().into());
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        ConfigNode::Object(map)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    /// JavaScript variable holding the instance, referenced from buttons.
    pub instance: String,
    pub ajax: ConfigNode,
    /// Table selector; `#<table id>` when `None`.
    pub table: Option<String>,
    pub fields: Vec<Field>,
    pub extra: ConfigMap,
}

impl Editor {
    /// An editor stored in the JavaScript variable `instance`.
    pub fn make(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            ajax: ConfigNode::String(String::new()),
            table: None,
            fields: Vec::new(),
            extra: ConfigMap::new(),
        }
    }

    pub fn ajax(mut self, ajax: impl Into<ConfigNode>) -> Self {
        self.ajax = ajax.into();
        self
    }

    pub fn table(mut self, selector: impl Into<String>) -> Self {
        self.table = Some(selector.into());
        self
    }

    /// Appends fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: ConfigNode) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Editor options; `table` defaults to `#<table_id>`.
    pub fn to_node(&self, table_id: &str) -> ConfigNode {
        let mut map = ConfigMap::new();
        map.insert("ajax".into(), self.ajax.clone());
        let table = self
            .table
            .clone()
            .unwrap_or_else(|| format!("#{table_id}"));
        map.insert("table".into(), table.into());
        map.insert(
            "fields".into(),
            ConfigNode::Array(self.fields.iter().map(Field::to_node).collect()),
        );
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        ConfigNode::Object(map)
    }
}
