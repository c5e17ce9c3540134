//! Key-value storage for user preferences.

use std::collections::HashMap;

use crate::error::Result;

/// A string key-value store the session persists preferences through.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// An in-memory [`PreferenceStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `key = value`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads a boolean stored as `"true"`; anything else, or nothing, is false.
pub fn read_flag(store: &dyn PreferenceStore, key: &str) -> Result<bool> {
    Ok(store.get(key)?.as_deref() == Some("true"))
}

/// Stores a boolean as `"true"` or `"false"`.
pub fn write_flag(store: &mut dyn PreferenceStore, key: &str, value: bool) -> Result<()> {
    store.set(key, if value { "true" } else { "false" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_round_trip() {
        let mut store = MemoryStore::new();
        assert!(!read_flag(&store, "useShortNames").unwrap());

        write_flag(&mut store, "useShortNames", true).unwrap();
        assert_eq!(store.get("useShortNames").unwrap().as_deref(), Some("true"));
        assert!(read_flag(&store, "useShortNames").unwrap());

        write_flag(&mut store, "useShortNames", false).unwrap();
        assert!(!read_flag(&store, "useShortNames").unwrap());
    }

    #[test]
    fn test_unexpected_values_read_false() {
        for value in ["TRUE", "1", "yes", ""] {
            let store = MemoryStore::with_value("flag", value);
            assert!(!read_flag(&store, "flag").unwrap(), "{:?}", value);
        }
    }
}
