use crate::core::LocalizationService;
use crate::domain::model::LocaleResource;
use crate::utils::error::{Result, RuleError};
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryLocaleStore {
    resources: RwLock<BTreeMap<String, String>>,
}

impl InMemoryLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let resources = self.resources.read().map_err(|e| poisoned(key, e))?;
        Ok(resources.get(key).cloned())
    }

    pub fn resources(&self) -> Result<Vec<LocaleResource>> {
        let resources = self.resources.read().map_err(|e| poisoned("*", e))?;
        Ok(resources
            .iter()
            .map(|(key, value)| LocaleResource {
                key: key.clone(),
                value: value.clone(),
            })
            .collect())
    }
}

fn poisoned<E: std::fmt::Display>(key: &str, e: E) -> RuleError {
    RuleError::LocalizationError {
        key: key.to_string(),
        message: format!("locale store lock poisoned: {}", e),
    }
}

impl LocalizationService for InMemoryLocaleStore {
    fn add_or_update_resource(&self, key: &str, value: &str) -> Result<()> {
        let mut resources = self.resources.write().map_err(|e| poisoned(key, e))?;
        resources.insert(key.to_string(), value.to_string());
        Ok(())
    }

    // Deleting a key that was never added is not an error.
    fn delete_resource(&self, key: &str) -> Result<()> {
        let mut resources = self.resources.write().map_err(|e| poisoned(key, e))?;
        resources.remove(key);
        Ok(())
    }
}
