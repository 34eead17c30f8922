use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub country_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub billing_address: Option<Address>,
}

/// Everything the host engine knows when asking whether a requirement holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRequirementValidationRequest {
    pub discount_requirement_id: i32,
    pub customer: Option<Customer>,
}

impl DiscountRequirementValidationRequest {
    pub fn new(discount_requirement_id: i32, customer: Option<Customer>) -> Self {
        Self {
            discount_requirement_id,
            customer,
        }
    }
}

/// Invalid unless a rule says otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRequirementValidationResult {
    pub is_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleResource {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub name: String,
    pub template: String,
    pub controller: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub system_name: String,
    pub friendly_name: String,
    pub group: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_defaults_to_invalid() {
        assert!(!DiscountRequirementValidationResult::default().is_valid);
    }

    #[test]
    fn test_request_deserializes_without_customer() {
        let json = r#"{"discount_requirement_id": 42}"#;
        let request: DiscountRequirementValidationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.discount_requirement_id, 42);
        assert!(request.customer.is_none());
    }
}
