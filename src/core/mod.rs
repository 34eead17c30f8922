pub mod routes;
pub mod rule;

pub use crate::domain::model::{
    Address, Customer, DiscountRequirementValidationRequest, DiscountRequirementValidationResult,
};
pub use crate::domain::ports::{
    DiscountRequirementRule, LocalizationService, PluginLifecycle, RouteBuilder, SettingService,
};
pub use crate::utils::error::Result;
