//! Depth-first leaf flattening.

use crate::{ConfigNode, KeyPath};

/// A leaf of the option tree together with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<'a> {
    pub path: KeyPath,
    pub value: &'a ConfigNode,
}

/// Flatten `root` into `(path, leaf)` pairs.
///
/// Objects are visited in key order and arrays in index order. Scalars and
/// empty containers are leaves; a scalar root yields a single leaf at the
/// root path.
pub fn flatten(root: &ConfigNode) -> Vec<Leaf<'_>> {
    let mut leaves = Vec::new();
    let mut path = KeyPath::root();
    collect(root, &mut path, &mut leaves);
    leaves
}

fn collect<'a>(node: &'a ConfigNode, path: &mut KeyPath, out: &mut Vec<Leaf<'a>>) {
    match node {
        ConfigNode::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                path.push_key(key.as_str());
                collect(child, path, out);
                path.pop();
            }
        }
        ConfigNode::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                path.push_index(index);
                collect(child, path, out);
                path.pop();
            }
        }
        _ => out.push(Leaf {
            path: path.clone(),
            value: node,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(value: &ConfigNode) -> Vec<String> {
        flatten(value).iter().map(|l| l.path.to_string()).collect()
    }

    #[test]
    fn scalar_root_is_single_leaf() {
        let value = json!(42);
        let leaves = flatten(&value);
        assert_eq!(leaves.len(), 1);
        assert!(leaves[0].path.is_root());
        assert_eq!(leaves[0].value, &json!(42));
    }

    #[test]
    fn visits_in_insertion_order() {
        let value = json!({"z": 1, "a": {"m": [true, null]}, "b": "x"});
        assert_eq!(paths(&value), vec!["z", "a.m.0", "a.m.1", "b"]);
    }

    #[test]
    fn empty_containers_are_leaves() {
        let value = json!({"columns": [], "language": {}});
        let leaves = flatten(&value);
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].value, &json!([]));
        assert_eq!(leaves[1].value, &json!({}));
    }
}
