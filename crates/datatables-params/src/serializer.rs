//! Raw-expression-preserving JSON serialization.
//!
//! The tree is copied with every raw string swapped for a placeholder,
//! encoded with `serde_json`, and each quoted placeholder in the output is
//! then replaced by the raw text. The replacement is a plain text
//! substitution over the whole output: see [`PlaceholderScheme`] for the
//! collision caveat.

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    flatten, path, to_config_node, CallbackMarker, ConfigNode, KeyPath, ParamsError,
    PlaceholderScheme, RawMarker,
};

/// A string leaf selected for verbatim output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLeaf {
    pub path: KeyPath,
    /// Trimmed text emitted in place of the quoted string.
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Serializer<M: RawMarker = CallbackMarker> {
    marker: M,
    scheme: PlaceholderScheme,
}

impl Default for Serializer<CallbackMarker> {
    fn default() -> Self {
        Self::new(CallbackMarker::default())
    }
}

impl<M: RawMarker> Serializer<M> {
    /// A serializer with the legacy placeholder scheme.
    pub fn new(marker: M) -> Self {
        Self {
            marker,
            scheme: PlaceholderScheme::Legacy,
        }
    }

    /// Switches the placeholder scheme.
    pub fn with_scheme(mut self, scheme: PlaceholderScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// The raw-expression predicate.
    pub fn marker(&self) -> &M {
        &self.marker
    }

    /// The placeholder scheme in use.
    pub fn scheme(&self) -> &PlaceholderScheme {
        &self.scheme
    }

    /// String leaves of `root` that will be emitted verbatim, in traversal
    /// order. Empty and whitespace-only strings are never raw.
    pub fn raw_leaves(&self, root: &ConfigNode) -> Vec<RawLeaf> {
        flatten(root)
            .into_iter()
            .filter_map(|leaf| {
                let text = leaf.value.as_str()?.trim();
                if text.is_empty() {
                    return None;
                }
                let dotted = leaf.path.to_string();
                self.marker.is_raw(&dotted, text).then(|| RawLeaf {
                    path: leaf.path,
                    text: text.to_string(),
                })
            })
            .collect()
    }

    /// Encodes `root` as JSON with every raw leaf emitted verbatim.
    pub fn serialize(&self, root: &ConfigNode) -> Result<String, ParamsError> {
        let raws = self.raw_leaves(root);
        if raws.is_empty() {
            return Ok(serde_json::to_string(root)?);
        }

        let mut patched = root.clone();
        for raw in &raws {
            path::set(
                &mut patched,
                &raw.path,
                ConfigNode::String(self.scheme.placeholder(&raw.path)),
            );
        }

        let mut json = serde_json::to_string(&patched)?;
        for raw in &raws {
            trace!(path = %raw.path, text = %raw.text, "substituting raw expression");
            json = json.replace(&self.scheme.quoted(&raw.path), &raw.text);
        }
        debug!(raw = raws.len(), bytes = json.len(), "serialized parameters");
        Ok(json)
    }

    /// Converts `value` with serde first, then serializes it.
    pub fn serialize_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, ParamsError> {
        self.serialize(&to_config_node(value)?)
    }
}

/// Serializes `root` with `marker` and the legacy placeholder scheme.
pub fn serialize<M: RawMarker + ?Sized>(root: &ConfigNode, marker: &M) -> Result<String, ParamsError> {
    Serializer::new(|path: &str, value: &str| marker.is_raw(path, value)).serialize(root)
}
