//! Predicates deciding which string values are script expressions.

/// Prefixes that mark a value as a script expression unless configured
/// otherwise.
pub const DEFAULT_CALLBACK_PREFIXES: [&str; 3] = ["$", "$.", "function"];

/// Decides whether the string `value` found at the dotted `path` is emitted
/// verbatim. Implementations must be pure functions of their arguments.
pub trait RawMarker {
    fn is_raw(&self, path: &str, value: &str) -> bool;
}

impl<F> RawMarker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_raw(&self, path: &str, value: &str) -> bool {
        self(path, value)
    }
}

/// Marks values that start with a callback prefix, and every value stored
/// under a path mentioning `editor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackMarker {
    prefixes: Vec<String>,
}

impl CallbackMarker {
    /// A marker with `prefixes` in place of the defaults.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Configured prefixes.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for CallbackMarker {
    fn default() -> Self {
        Self::new(DEFAULT_CALLBACK_PREFIXES)
    }
}

impl RawMarker for CallbackMarker {
    fn is_raw(&self, path: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && value.starts_with(prefix.as_str()))
            || path.contains("editor")
    }
}
