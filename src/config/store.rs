//! The merged configuration store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Merged configuration values: section name → key name → value.
///
/// Section and key names are case-insensitive; they are normalized to
/// lowercase on both insert and lookup, so `store.get("Color", "UI")` and
/// `store.get("color", "ui")` are the same query. Values are stored
/// verbatim. Within a section the last write wins, which is what gives
/// higher-precedence files their override behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigStore {
    /// Looks up a value, or `None` when the section or key is absent.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(&section.to_lowercase())?
            .get(&key.to_lowercase())
            .map(String::as_str)
    }

    /// Looks up a value, falling back to `fallback` when absent.
    pub fn get_or<'a>(&'a self, section: &str, key: &str, fallback: &'a str) -> &'a str {
        self.get(section, key).unwrap_or(fallback)
    }

    /// Looks up a value and interprets it as a boolean.
    ///
    /// Accepts `true`/`false`, `yes`/`no`, `on`/`off`, and `1`/`0`,
    /// case-insensitive. An absent key yields `fallback`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBool`] when the value is present but
    /// matches none of the boolean literals.
    pub fn get_bool(&self, section: &str, key: &str, fallback: bool) -> Result<bool, ConfigError> {
        match self.get(section, key) {
            None => Ok(fallback),
            Some(value) => parse_bool(value).ok_or_else(|| ConfigError::InvalidBool {
                section: section.to_lowercase(),
                key: key.to_lowercase(),
                value: value.to_string(),
            }),
        }
    }

    /// Sets a value, overwriting any previous one for the same section/key.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_lowercase())
            .or_default()
            .insert(key.to_lowercase(), value.into());
    }

    /// All keys and values of one section, or `None` when it is absent.
    pub fn section(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.sections.get(&name.to_lowercase())
    }

    /// Iterates over section names in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Whether no file contributed any value.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// The boolean grammar shared by all boolean-valued keys.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut store = ConfigStore::default();
        store.set("core", "editor", "vi");
        store.set("core", "editor", "emacs");
        assert_eq!(store.get("core", "editor"), Some("emacs"));
    }

    // Lookup is case-insensitive for sections as well as keys; Python's
    // configparser only normalizes keys, so this is the documented
    // deviation.
    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut store = ConfigStore::default();
        store.set("Color", "UI", "true");
        assert_eq!(store.get("color", "ui"), Some("true"));
        assert_eq!(store.get("COLOR", "Ui"), Some("true"));
    }

    #[test]
    fn test_get_or_fallback() {
        let store = ConfigStore::default();
        assert_eq!(store.get_or("core", "editor", "vi"), "vi");
    }

    #[test]
    fn test_bool_grammar() {
        let mut store = ConfigStore::default();
        for (value, expected) in [
            ("true", true),
            ("True", true),
            ("YES", true),
            ("on", true),
            ("1", true),
            ("false", false),
            ("No", false),
            ("OFF", false),
            ("0", false),
        ] {
            store.set("color", "ui", value);
            assert_eq!(store.get_bool("color", "ui", false).unwrap(), expected, "value {value:?}");
        }
    }

    #[test]
    fn test_bool_fallback_when_absent() {
        let store = ConfigStore::default();
        assert!(store.get_bool("color", "ui", true).unwrap());
        assert!(!store.get_bool("color", "ui", false).unwrap());
    }

    #[test]
    fn test_bool_garbage_is_an_error() {
        let mut store = ConfigStore::default();
        store.set("color", "ui", "maybe");
        let err = store.get_bool("color", "ui", true).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_sections_accumulate() {
        let mut store = ConfigStore::default();
        store.set("core", "a", "1");
        store.set("core", "b", "2");
        assert_eq!(store.section("core").unwrap().len(), 2);
        assert_eq!(store.sections().collect::<Vec<_>>(), vec!["core"]);
        assert!(!store.is_empty());
    }
}
