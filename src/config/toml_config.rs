use crate::adapters::InMemorySettingStore;
use crate::utils::error::{Result, RuleError};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_setting_key, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    pub plugin: PluginSection,
    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSection {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Settings may be written as TOML integers or strings; both are stored as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Integer(i64),
    Text(String),
}

impl SettingValue {
    pub fn as_setting_string(&self) -> String {
        match self {
            SettingValue::Integer(i) => i.to_string(),
            SettingValue::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl PluginConfig {
    pub fn new(name: &str) -> Self {
        Self {
            plugin: PluginSection {
                name: name.to_string(),
                version: None,
            },
            settings: BTreeMap::new(),
            logging: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RuleError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("plugin.name", &self.plugin.name)?;

        for key in self.settings.keys() {
            validate_setting_key("settings", key)?;
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn setting_store(&self) -> InMemorySettingStore {
        InMemorySettingStore::from_values(
            self.settings
                .iter()
                .map(|(k, v)| (k.clone(), v.as_setting_string())),
        )
    }

    /// Replaces the settings table with the store contents. Keys already in the
    /// table keep their TOML type; new keys become integers only when the value
    /// is a canonical integer, so `"007"` stays text.
    pub fn absorb_settings(&mut self, store: &InMemorySettingStore) -> Result<()> {
        let previous = std::mem::take(&mut self.settings);
        self.settings = store
            .snapshot()?
            .into_iter()
            .map(|(key, value)| {
                let value = match previous.get(&key) {
                    Some(SettingValue::Text(_)) => SettingValue::Text(value),
                    _ => Self::typed_setting(value),
                };
                (key, value)
            })
            .collect();
        Ok(())
    }

    fn typed_setting(value: String) -> SettingValue {
        match value.parse::<i64>() {
            Ok(i) if i.to_string() == value => SettingValue::Integer(i),
            _ => SettingValue::Text(value),
        }
    }
}

impl Validate for PluginConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
