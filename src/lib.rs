pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliArgs, Command};

pub use crate::adapters::{InMemoryLocaleStore, InMemorySettingStore, RouteTable};
pub use crate::config::PluginConfig;
pub use crate::core::routes::RouteProvider;
pub use crate::core::rule::{billing_country_setting_key, BillingCountryRule};
pub use crate::core::{DiscountRequirementRule, PluginLifecycle};
pub use crate::utils::error::{Result, RuleError};
