use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid argument: {name} must be provided")]
    InvalidArgument { name: String },

    #[error("Setting error for key '{key}': {message}")]
    SettingsError { key: String, message: String },

    #[error("Localization error for resource '{key}': {message}")]
    LocalizationError { key: String, message: String },

    #[error("Routing error for route '{name}': {message}")]
    RoutingError { name: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RuleError {
    pub fn invalid_argument(name: &str) -> Self {
        RuleError::InvalidArgument {
            name: name.to_string(),
        }
    }

    /// Short message suitable for printing to a terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RuleError::InvalidArgument { name } => format!("Missing required input: {}", name),
            RuleError::SettingsError { key, .. } => format!("Could not read setting '{}'", key),
            RuleError::LocalizationError { key, .. } => {
                format!("Could not update locale resource '{}'", key)
            }
            RuleError::RoutingError { name, .. } => format!("Could not register route '{}'", name),
            RuleError::IoError(_) => "File access failed".to_string(),
            RuleError::SerializationError(_) => "Could not produce JSON output".to_string(),
            RuleError::TomlError(_) | RuleError::TomlSerializeError(_) => {
                "Configuration file is not valid TOML".to_string()
            }
            RuleError::ConfigError { message } => message.clone(),
            RuleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RuleError::InvalidArgument { .. } => "Pass a validation request to the rule",
            RuleError::SettingsError { .. } => {
                "Check that the setting holds a whole-number country identifier"
            }
            RuleError::LocalizationError { .. } => "Check the localization store is writable",
            RuleError::RoutingError { .. } => "Check for a duplicate route name",
            RuleError::IoError(_) => "Make sure the file exists and is readable",
            RuleError::SerializationError(_) => "Report this as a bug",
            RuleError::TomlError(_) | RuleError::TomlSerializeError(_) => {
                "Fix the TOML syntax in the configuration file"
            }
            RuleError::ConfigError { .. }
            | RuleError::InvalidConfigValueError { .. } => "Review the configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = RuleError::invalid_argument("request");
        assert_eq!(err.to_string(), "Invalid argument: request must be provided");
        assert_eq!(err.user_friendly_message(), "Missing required input: request");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RuleError = io.into();
        assert!(matches!(err, RuleError::IoError(_)));
        assert_eq!(err.recovery_suggestion(), "Make sure the file exists and is readable");
    }
}
