//! Typed key paths into a [`ConfigNode`] tree.
//!
//! Paths display in dotted form (`columns.0.render`), but lookups and
//! mutation walk the typed segments, so keys that contain `.` never split.

use std::fmt;

use crate::ConfigNode;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A path from the root of a tree to one of its nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// The empty path, addressing the root itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Segments from the root down.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True for the empty path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends an object key.
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(Segment::Key(key.into()));
    }

    /// Appends an array index.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// A copy of this path extended by an object key.
    pub fn child_key(&self, key: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push_key(key);
        child
    }

    /// A copy of this path extended by an array index.
    pub fn child_index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push_index(index);
        child
    }

    /// Substring test against the dotted form.
    pub fn contains(&self, needle: &str) -> bool {
        self.to_string().contains(needle)
    }

    /// Dotted form with `~`, `.` and `%` in keys escaped as `~0`, `~1` and
    /// `~2`. Distinct paths within one tree always encode differently.
    pub fn encoded(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match segment {
                Segment::Key(key) => out.push_str(&escape_key(key)),
                Segment::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }
}

/// Escapes one key segment for [`KeyPath::encoded`].
pub fn escape_key(key: &str) -> String {
    if !key.contains(['~', '.', '%']) {
        return key.to_string();
    }
    key.replace('~', "~0").replace('.', "~1").replace('%', "~2")
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    /// Builds a path of key segments; all-digit parts become indices.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let segments = iter
            .into_iter()
            .map(Into::into)
            .map(|part: String| match part.parse::<usize>() {
                Ok(index) if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) => {
                    Segment::Index(index)
                }
                _ => Segment::Key(part),
            })
            .collect();
        Self { segments }
    }
}

/// Looks up the node at `path`.
pub fn get<'a>(root: &'a ConfigNode, path: &KeyPath) -> Option<&'a ConfigNode> {
    let mut node = root;
    for segment in path.segments() {
        node = match (segment, node) {
            (Segment::Key(key), ConfigNode::Object(map)) => map.get(key)?,
            (Segment::Index(index), ConfigNode::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Replaces the node at `path`. Returns `false` when the path does not
/// exist; the tree is left untouched in that case.
pub fn set(root: &mut ConfigNode, path: &KeyPath, value: ConfigNode) -> bool {
    let mut node = root;
    for segment in path.segments() {
        node = match (segment, node) {
            (Segment::Key(key), ConfigNode::Object(map)) => match map.get_mut(key) {
                Some(child) => child,
                None => return false,
            },
            (Segment::Index(index), ConfigNode::Array(items)) => match items.get_mut(*index) {
                Some(child) => child,
                None => return false,
            },
            _ => return false,
        };
    }
    *node = value;
    true
}
