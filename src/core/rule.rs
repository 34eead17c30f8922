use crate::core::{DiscountRequirementRule, LocalizationService, PluginLifecycle, SettingService};
use crate::core::routes::CONFIGURE_ROUTE_TEMPLATE;
use crate::domain::model::{
    DiscountRequirementValidationRequest, DiscountRequirementValidationResult, LocaleResource,
    PluginDescriptor,
};
use crate::utils::error::{Result, RuleError};
use crate::utils::validation::validate_country_id;
use url::form_urlencoded;

pub const SYSTEM_NAME: &str = "DiscountRequirement.BillingCountryIs";
pub const FRIENDLY_NAME: &str = "Billing country is";

const SETTING_KEY_PREFIX: &str = "DiscountRequirement.BillingCountry-";

/// Locale resources owned by the plugin, as (key, default value).
pub const LOCALE_RESOURCES: [(&str, &str); 3] = [
    (
        "Plugins.DiscountRules.BillingCountry.Fields.SelectCountry",
        "Select country",
    ),
    (
        "Plugins.DiscountRules.BillingCountry.Fields.Country",
        "Billing country",
    ),
    (
        "Plugins.DiscountRules.BillingCountry.Fields.Country.Hint",
        "Select required billing country.",
    ),
];

/// Setting key holding the required country of one discount requirement.
/// The host persists this key, so the format must not change.
pub fn billing_country_setting_key(discount_requirement_id: i32) -> String {
    format!("{}{}", SETTING_KEY_PREFIX, discount_requirement_id)
}

pub fn locale_resources() -> Vec<LocaleResource> {
    LOCALE_RESOURCES
        .iter()
        .map(|(key, value)| LocaleResource {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// "Billing country is" discount requirement.
pub struct BillingCountryRule<S: SettingService, L: LocalizationService> {
    pub(crate) settings: S,
    pub(crate) localization: L,
}

impl<S: SettingService, L: LocalizationService> BillingCountryRule<S, L> {
    pub fn new(settings: S, localization: L) -> Self {
        Self {
            settings,
            localization,
        }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn localization(&self) -> &L {
        &self.localization
    }

    pub fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor {
            system_name: SYSTEM_NAME.to_string(),
            friendly_name: FRIENDLY_NAME.to_string(),
            group: "Discount requirements".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Required country for a requirement, `None` when unset or `0`.
    pub fn configured_country(&self, discount_requirement_id: i32) -> Result<Option<i32>> {
        let key = billing_country_setting_key(discount_requirement_id);
        let country_id: i32 = self.settings.get_setting_by_key(&key)?;
        Ok((country_id != 0).then_some(country_id))
    }

    /// Stores the required country. `0` clears the requirement.
    pub fn configure_requirement(&self, discount_requirement_id: i32, country_id: i32) -> Result<()> {
        validate_country_id("country_id", country_id)?;

        let key = billing_country_setting_key(discount_requirement_id);
        self.settings.set_setting(&key, &country_id.to_string())?;
        tracing::info!(
            "Discount requirement {} now requires billing country {}",
            discount_requirement_id,
            country_id
        );
        Ok(())
    }

    fn evaluate(
        &self,
        request: &DiscountRequirementValidationRequest,
    ) -> Result<DiscountRequirementValidationResult> {
        let mut result = DiscountRequirementValidationResult::default();

        let Some(customer) = request.customer.as_ref() else {
            tracing::debug!(
                "Requirement {}: no customer, invalid",
                request.discount_requirement_id
            );
            return Ok(result);
        };

        let Some(billing_address) = customer.billing_address.as_ref() else {
            tracing::debug!(
                "Requirement {}: customer has no billing address, invalid",
                request.discount_requirement_id
            );
            return Ok(result);
        };

        let key = billing_country_setting_key(request.discount_requirement_id);
        let billing_country_id: i32 = self.settings.get_setting_by_key(&key)?;

        if billing_country_id == 0 {
            tracing::debug!("Setting {} not configured, invalid", key);
            return Ok(result);
        }

        result.is_valid = billing_address.country_id == Some(billing_country_id);
        tracing::debug!(
            "Requirement {}: billing country {:?} vs required {} -> {}",
            request.discount_requirement_id,
            billing_address.country_id,
            billing_country_id,
            result.is_valid
        );

        Ok(result)
    }
}

impl<S: SettingService, L: LocalizationService> DiscountRequirementRule
    for BillingCountryRule<S, L>
{
    fn check_requirement(
        &self,
        request: Option<&DiscountRequirementValidationRequest>,
    ) -> Result<DiscountRequirementValidationResult> {
        let request = request.ok_or_else(|| RuleError::invalid_argument("request"))?;
        self.evaluate(request)
    }

    fn configuration_url(&self, discount_id: i32, discount_requirement_id: Option<i32>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("discountId", &discount_id.to_string());
        if let Some(requirement_id) = discount_requirement_id {
            query.append_pair("discountRequirementId", &requirement_id.to_string());
        }

        format!("{}?{}", CONFIGURE_ROUTE_TEMPLATE, query.finish())
    }
}

impl<S: SettingService, L: LocalizationService> PluginLifecycle for BillingCountryRule<S, L> {
    fn install(&self) -> Result<()> {
        for (key, value) in LOCALE_RESOURCES {
            self.localization.add_or_update_resource(key, value)?;
        }
        tracing::info!("Installed {} ({} locale resources)", SYSTEM_NAME, LOCALE_RESOURCES.len());
        Ok(())
    }

    fn uninstall(&self) -> Result<()> {
        for (key, _) in LOCALE_RESOURCES {
            self.localization.delete_resource(key)?;
        }
        tracing::info!("Uninstalled {}", SYSTEM_NAME);
        Ok(())
    }
}
