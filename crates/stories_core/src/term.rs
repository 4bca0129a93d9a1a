use crate::Effect;

/// Key under which the working search term is stored.
pub const SEARCH_TERM_KEY: &str = "search";
pub const DEFAULT_SEARCH_TERM: &str = "React";

/// Working search term mirrored into a key-value store.
///
/// The restored value is never written back; every later change produces
/// exactly one [`Effect::PersistTerm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTerm {
    key: String,
    value: String,
}

impl PersistedTerm {
    /// An absent or empty stored value falls back to `default`.
    pub fn restore(key: impl Into<String>, stored: Option<String>, default: &str) -> Self {
        let value = stored
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string());
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Updates the value and returns the store write it requires, if any.
    pub fn set(&mut self, value: String) -> Option<Effect> {
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(Effect::PersistTerm {
            key: self.key.clone(),
            value: self.value.clone(),
        })
    }
}

impl Default for PersistedTerm {
    fn default() -> Self {
        Self::restore(SEARCH_TERM_KEY, None, DEFAULT_SEARCH_TERM)
    }
}
