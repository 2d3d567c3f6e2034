//! Placeholder tokens standing in for raw values during JSON encoding.

use rand::Rng;

use crate::KeyPath;

/// How placeholders are spelled.
///
/// `Legacy` uses `%<path>%`, with the path in its escaped form (see
/// [`KeyPath::encoded`]). A legitimate string equal to such a token is
/// replaced as well; that collision is not detected. `Nonce` embeds a
/// per-serializer token, `%<nonce>:<path>%`, so accidental matches need the
/// nonce too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaceholderScheme {
    #[default]
    Legacy,
    Nonce(String),
}

impl PlaceholderScheme {
    /// A nonce scheme with 64 random bits.
    pub fn random() -> Self {
        let bits: u64 = rand::thread_rng().gen();
        PlaceholderScheme::Nonce(format!("{bits:016x}"))
    }

    /// The placeholder token for `path`, without quotes.
    pub fn placeholder(&self, path: &KeyPath) -> String {
        let path = path.encoded();
        match self {
            PlaceholderScheme::Legacy => format!("%{path}%"),
            PlaceholderScheme::Nonce(nonce) => format!("%{nonce}:{path}%"),
        }
    }

    /// The placeholder exactly as it appears in JSON output, quotes included.
    pub fn quoted(&self, path: &KeyPath) -> String {
        // Serializing a string cannot fail.
        serde_json::to_string(&self.placeholder(path)).unwrap_or_default()
    }
}
