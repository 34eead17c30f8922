use anyhow::Result;
use discount_rules_billing_country::config::toml_config::SettingValue;
use discount_rules_billing_country::core::rule::LOCALE_RESOURCES;
use discount_rules_billing_country::core::DiscountRequirementValidationRequest;
use discount_rules_billing_country::core::{Address, Customer, LocalizationService};
use discount_rules_billing_country::{
    BillingCountryRule, DiscountRequirementRule, InMemoryLocaleStore, PluginConfig,
    PluginLifecycle, RouteProvider, RouteTable,
};
use tempfile::TempDir;

#[test]
fn test_install_adds_three_resources_and_uninstall_removes_them() -> Result<()> {
    let config = PluginConfig::new("billing-country");
    let rule = BillingCountryRule::new(config.setting_store(), InMemoryLocaleStore::new());

    rule.localization()
        .add_or_update_resource("Some.Other.Resource", "kept")?;

    rule.install()?;
    let installed = rule.localization().resources()?;
    assert_eq!(installed.len(), 4);
    for (key, value) in LOCALE_RESOURCES {
        assert_eq!(rule.localization().get(key)?.as_deref(), Some(value));
    }

    // Installing twice leaves the same set.
    rule.install()?;
    assert_eq!(rule.localization().resources()?.len(), 4);

    rule.uninstall()?;
    let remaining = rule.localization().resources()?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].key, "Some.Other.Resource");
    Ok(())
}

#[test]
fn test_configuration_url_resolves_to_registered_route() -> Result<()> {
    let mut table = RouteTable::new();
    RouteProvider::new().register_routes(&mut table)?;

    let rule = BillingCountryRule::new(
        PluginConfig::new("billing-country").setting_store(),
        InMemoryLocaleStore::new(),
    );

    let new_requirement = rule.configuration_url(5, None);
    assert!(new_requirement.contains("discountId=5"));
    assert!(!new_requirement.contains("discountRequirementId"));

    let existing = rule.configuration_url(5, Some(42));
    assert!(existing.contains("discountId=5"));
    assert!(existing.contains("discountRequirementId=42"));

    for url in [new_requirement, existing] {
        let route = table.resolve(&url).expect("configuration route registered");
        assert_eq!(route.controller, "DiscountRulesBillingCountry");
        assert_eq!(route.action, "Configure");
    }

    // Negative and zero ids are passed through untouched.
    assert!(rule.configuration_url(0, None).ends_with("discountId=0"));
    assert!(rule.configuration_url(-3, None).ends_with("discountId=-3"));
    Ok(())
}

#[test]
fn test_configure_persists_through_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("billing-country.toml");
    std::fs::write(
        &path,
        r#"
[plugin]
name = "billing-country"

[settings]
"DiscountRequirement.BillingCountry-1" = 81
"#,
    )?;

    let mut config = PluginConfig::from_file(&path)?;
    let rule = BillingCountryRule::new(config.setting_store(), InMemoryLocaleStore::new());
    rule.configure_requirement(2, 12)?;
    config.absorb_settings(rule.settings())?;
    config.to_file(&path)?;

    let reloaded = PluginConfig::from_file(&path)?;
    assert_eq!(
        reloaded.settings.get("DiscountRequirement.BillingCountry-1"),
        Some(&SettingValue::Integer(81))
    );
    assert_eq!(
        reloaded.settings.get("DiscountRequirement.BillingCountry-2"),
        Some(&SettingValue::Integer(12))
    );

    let rule = BillingCountryRule::new(reloaded.setting_store(), InMemoryLocaleStore::new());
    let request = DiscountRequirementValidationRequest::new(
        2,
        Some(Customer {
            billing_address: Some(Address {
                country_id: Some(12),
            }),
        }),
    );
    assert!(rule.check_requirement(Some(&request))?.is_valid);
    Ok(())
}
