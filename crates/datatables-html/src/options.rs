//! Ajax source and typed widget option values.

use datatables_params::{ConfigMap, ConfigNode};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Ajax {
    Url(String),
    /// Request with an explicit method and extra request data, assigned by
    /// a generated `data` callback.
    Request {
        url: String,
        method: String,
        data: IndexMap<String, String>,
    },
    /// Any other ajax option object.
    Custom(ConfigNode),
}

impl Default for Ajax {
    fn default() -> Self {
        Ajax::Url(String::new())
    }
}

impl Ajax {
    /// A `GET` request sending `data` with each draw.
    pub fn get(url: impl Into<String>, data: IndexMap<String, String>) -> Self {
        Ajax::Request {
            url: url.into(),
            method: "GET".to_string(),
            data,
        }
    }

    /// A `POST` request sending `data` with each draw.
    pub fn post(url: impl Into<String>, data: IndexMap<String, String>) -> Self {
        Ajax::Request {
            url: url.into(),
            method: "POST".to_string(),
            data,
        }
    }

    /// The `ajax` option value.
    pub fn to_node(&self) -> ConfigNode {
        match self {
            Ajax::Url(url) => ConfigNode::String(url.clone()),
            Ajax::Request { url, method, data } => {
                let mut map = ConfigMap::new();
                map.insert("url".into(), url.clone().into());
                map.insert("type".into(), method.clone().into());
                if !data.is_empty() {
                    map.insert(
                        "data".into(),
                        format!("function(data) {{{}\n}}", make_data_script(data)).into(),
                    );
                }
                ConfigNode::Object(map)
            }
            Ajax::Custom(node) => node.clone(),
        }
    }
}

impl From<&str> for Ajax {
    fn from(url: &str) -> Self {
        Ajax::Url(url.to_string())
    }
}

impl From<String> for Ajax {
    fn from(url: String) -> Self {
        Ajax::Url(url)
    }
}

/// One `data.<key> = '<value>';` statement per entry, each on its own line.
pub fn make_data_script(data: &IndexMap<String, String>) -> String {
    let mut script = String::new();
    for (key, value) in data {
        script.push_str(&format!("\ndata.{key} = '{}';", escape_js_string(value)));
    }
    script
}

/// Escapes `value` for a single-quoted JavaScript string inside a
/// `<script>` element.
fn escape_js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' if chars.peek() == Some(&'/') => out.push_str("<\\"),
            other => out.push(other),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}
