//! HTML attribute bags.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Text(String),
    Classes(Vec<String>),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::Classes(value)
    }
}

/// Ordered attribute map rendered as ` key="value"` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlAttributes(IndexMap<String, AttrValue>);

impl HtmlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Text form of an attribute, as it would be rendered (unescaped).
    pub fn get_text(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            AttrValue::Text(text) => Some(text.clone()),
            AttrValue::Classes(classes) => Some(classes.join(" ")),
            AttrValue::Flag(true) => Some(name.to_string()),
            AttrValue::Flag(false) => None,
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.shift_remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.0.iter()
    }

    /// Overlays `other`; existing names keep their position.
    pub fn merge(&mut self, other: &HtmlAttributes) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// A copy with `other` merged in.
    pub fn merged(mut self, other: &HtmlAttributes) -> Self {
        self.merge(other);
        self
    }

    /// Copy holding only `names`, in this map's order.
    pub fn only(&self, names: &[&str]) -> HtmlAttributes {
        HtmlAttributes(
            self.0
                .iter()
                .filter(|(name, _)| names.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        )
    }

    /// Renders as ` name="value"` pairs. A true flag renders as
    /// ` name="name"`; a false one is skipped.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HtmlAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.0 {
            match value {
                AttrValue::Flag(false) => {}
                AttrValue::Flag(true) => write!(f, " {name}=\"{name}\"")?,
                AttrValue::Text(text) => write!(f, " {name}=\"{}\"", escape_html(text))?,
                AttrValue::Classes(classes) => {
                    write!(f, " {name}=\"{}\"", escape_html(&classes.join(" ")))?
                }
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for HtmlAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        HtmlAttributes(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
