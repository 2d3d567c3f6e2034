//! Parameter serialization for the DataTables widget.
//!
//! Turns an option tree into JSON text in which selected string values are
//! emitted verbatim as script expressions instead of quoted strings:
//!
//! ```
//! use datatables_params::{serialize, CallbackMarker};
//! use serde_json::json;
//!
//! let options = json!({"columns": [{"data": "age", "render": "function(d){return d}"}]});
//! let out = serialize(&options, &CallbackMarker::default()).unwrap();
//! assert_eq!(out, r#"{"columns":[{"data":"age","render":function(d){return d}}]}"#);
//! ```

mod error;
mod flatten;
mod marker;
mod node;
mod parameters;
mod path;
mod placeholder;
mod serializer;

pub use error::ParamsError;
pub use flatten::{flatten, Leaf};
pub use marker::{CallbackMarker, RawMarker, DEFAULT_CALLBACK_PREFIXES};
pub use node::{to_config_node, ConfigMap, ConfigNode};
pub use parameters::Parameters;
pub use path::{escape_key, get, set, KeyPath, Segment};
pub use placeholder::PlaceholderScheme;
pub use serializer::{serialize, RawLeaf, Serializer};
