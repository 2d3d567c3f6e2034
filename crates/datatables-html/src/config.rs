//! Builder configuration.
//!
//! Hosts load this from wherever they keep settings and hand it to
//! [`Builder::new`](crate::Builder::new); nothing here reads files or
//! process-wide state.

use datatables_params::{CallbackMarker, PlaceholderScheme, DEFAULT_CALLBACK_PREFIXES};
use serde::Deserialize;

use crate::attributes::HtmlAttributes;
use crate::template::DEFAULT_SCRIPT_TEMPLATE;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Default `<table>` attributes.
    pub table: HtmlAttributes,
    /// Prefixes marking option values as script expressions.
    pub callback: Vec<String>,
    /// Script template name.
    pub script: String,
    /// JavaScript global collecting table instances.
    pub namespace: String,
    /// Use per-call random placeholders instead of `%path%`.
    pub nonce_placeholders: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            table: HtmlAttributes::new()
                .with("class", "table")
                .with("id", "dataTableBuilder"),
            callback: DEFAULT_CALLBACK_PREFIXES.iter().map(|p| p.to_string()).collect(),
            script: DEFAULT_SCRIPT_TEMPLATE.to_string(),
            namespace: "LaravelDataTables".to_string(),
            nonce_placeholders: false,
        }
    }
}

impl BuilderConfig {
    /// The raw-expression predicate for these prefixes.
    pub fn marker(&self) -> CallbackMarker {
        CallbackMarker::new(self.callback.iter().cloned())
    }

    /// A fresh nonce scheme when enabled, otherwise the legacy one.
    pub fn placeholder_scheme(&self) -> PlaceholderScheme {
        if self.nonce_placeholders {
            PlaceholderScheme::random()
        } else {
            PlaceholderScheme::Legacy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.table.render(), r#" class="table" id="dataTableBuilder""#);
        assert_eq!(config.marker(), CallbackMarker::default());
        assert_eq!(config.placeholder_scheme(), PlaceholderScheme::Legacy);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: BuilderConfig = toml::from_str(
            r#"
            callback = ["$", "function", "moment("]
            nonce_placeholders = true

            [table]
            class = ["table", "table-hover"]
            id = "users"
            "#,
        )
        .unwrap();
        assert_eq!(config.callback, vec!["$", "function", "moment("]);
        assert_eq!(config.script, DEFAULT_SCRIPT_TEMPLATE);
        assert_eq!(config.namespace, "LaravelDataTables");
        assert_eq!(config.table.render(), r#" class="table table-hover" id="users""#);
        assert!(matches!(config.placeholder_scheme(), PlaceholderScheme::Nonce(_)));
    }
}
