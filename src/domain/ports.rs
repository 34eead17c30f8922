use crate::domain::model::{
    DiscountRequirementValidationRequest, DiscountRequirementValidationResult, RouteDefinition,
};
use crate::utils::error::{Result, RuleError};
use std::str::FromStr;

/// Host key-value settings store. Values are kept as strings, the way the host persists them.
pub trait SettingService: Send + Sync {
    fn get_setting(&self, key: &str) -> Result<Option<String>>;
    fn set_setting(&self, key: &str, value: &str) -> Result<()>;

    /// Typed lookup. A missing key yields `T::default()`, matching the host convention.
    fn get_setting_by_key<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr + Default,
        T::Err: std::fmt::Display,
        Self: Sized,
    {
        match self.get_setting(key)? {
            None => Ok(T::default()),
            Some(raw) => raw.trim().parse::<T>().map_err(|e| RuleError::SettingsError {
                key: key.to_string(),
                message: format!("cannot parse '{}': {}", raw, e),
            }),
        }
    }
}

pub trait LocalizationService: Send + Sync {
    fn add_or_update_resource(&self, key: &str, value: &str) -> Result<()>;
    fn delete_resource(&self, key: &str) -> Result<()>;
}

pub trait RouteBuilder {
    fn map_route(&mut self, route: RouteDefinition) -> Result<()>;
}

/// What the host discount engine and admin UI see of a requirement rule.
pub trait DiscountRequirementRule {
    /// `None` is a caller bug and fails with `InvalidArgument`.
    fn check_requirement(
        &self,
        request: Option<&DiscountRequirementValidationRequest>,
    ) -> Result<DiscountRequirementValidationResult>;

    fn configuration_url(&self, discount_id: i32, discount_requirement_id: Option<i32>) -> String;
}

pub trait PluginLifecycle {
    fn install(&self) -> Result<()>;
    fn uninstall(&self) -> Result<()>;
}
