use crate::core::SettingService;
use crate::utils::error::{Result, RuleError};
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemorySettingStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl InMemorySettingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }

    /// Copy of the current contents, sorted by key.
    pub fn snapshot(&self) -> Result<BTreeMap<String, String>> {
        let values = self.values.read().map_err(|e| poisoned("*", e))?;
        Ok(values.clone())
    }
}

fn poisoned<E: std::fmt::Display>(key: &str, e: E) -> RuleError {
    RuleError::SettingsError {
        key: key.to_string(),
        message: format!("setting store lock poisoned: {}", e),
    }
}

impl SettingService for InMemorySettingStore {
    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|e| poisoned(key, e))?;
        Ok(values.get(key).cloned())
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|e| poisoned(key, e))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_yields_default() {
        let store = InMemorySettingStore::new();
        let value: i32 = store.get_setting_by_key("absent").unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_typed_lookup_parses_stored_string() {
        let store = InMemorySettingStore::from_values([("answer", " 42 ")]);
        let value: i32 = store.get_setting_by_key("answer").unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_unparseable_value_is_settings_error() {
        let store = InMemorySettingStore::from_values([("answer", "forty-two")]);
        let err = store.get_setting_by_key::<i32>("answer").unwrap_err();
        assert!(matches!(err, RuleError::SettingsError { ref key, .. } if key == "answer"));
    }

    #[test]
    fn test_set_overwrites() {
        let store = InMemorySettingStore::new();
        store.set_setting("k", "1").unwrap();
        store.set_setting("k", "2").unwrap();
        assert_eq!(store.get_setting("k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.snapshot().unwrap().len(), 1);
    }
}
