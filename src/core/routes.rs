use crate::core::RouteBuilder;
use crate::domain::model::RouteDefinition;
use crate::utils::error::Result;

pub const CONFIGURE_ROUTE_NAME: &str = "Plugin.DiscountRules.BillingCountry.Configure";
pub const CONFIGURE_ROUTE_TEMPLATE: &str = "Plugins/DiscountRulesBillingCountry/Configure";
pub const CONTROLLER: &str = "DiscountRulesBillingCountry";

#[derive(Debug, Clone, Copy, Default)]
pub struct RouteProvider;

impl RouteProvider {
    pub fn new() -> Self {
        Self
    }

    /// Registration order relative to other providers; lower runs first.
    pub fn priority(&self) -> i32 {
        0
    }

    /// Maps the configuration page. It accepts `discountId` and an optional
    /// `discountRequirementId` in the query string.
    pub fn register_routes<B: RouteBuilder>(&self, builder: &mut B) -> Result<()> {
        builder.map_route(RouteDefinition {
            name: CONFIGURE_ROUTE_NAME.to_string(),
            template: CONFIGURE_ROUTE_TEMPLATE.to_string(),
            controller: CONTROLLER.to_string(),
            action: "Configure".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RouteTable;

    #[test]
    fn test_register_configure_route() {
        let mut table = RouteTable::new();
        RouteProvider::new().register_routes(&mut table).unwrap();

        let route = table.find(CONFIGURE_ROUTE_NAME).unwrap();
        assert_eq!(route.template, "Plugins/DiscountRulesBillingCountry/Configure");
        assert_eq!(route.controller, "DiscountRulesBillingCountry");
        assert_eq!(route.action, "Configure");
        assert_eq!(RouteProvider::new().priority(), 0);
    }

    #[test]
    fn test_registering_twice_fails() {
        let mut table = RouteTable::new();
        let provider = RouteProvider::new();
        provider.register_routes(&mut table).unwrap();
        assert!(provider.register_routes(&mut table).is_err());
    }
}
