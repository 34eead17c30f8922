use crate::utils::error::{Result, RuleError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RuleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Setting keys are stored verbatim by the host, so surrounding whitespace or
/// control characters would make them unreachable.
pub fn validate_setting_key(field_name: &str, key: &str) -> Result<()> {
    validate_non_empty_string(field_name, key)?;

    if key.trim() != key || key.chars().any(char::is_control) {
        return Err(RuleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Setting key contains whitespace padding or control characters".to_string(),
        });
    }
    Ok(())
}

/// Country identifiers are positive; `0` is reserved for "no country configured".
pub fn validate_country_id(field_name: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(RuleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Country identifier cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RuleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
