use crate::core::RouteBuilder;
use crate::domain::model::RouteDefinition;
use crate::utils::error::{Result, RuleError};

/// Ordered route table. Route names must be unique.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn find(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Route whose template matches the path part of `url` (query string ignored).
    pub fn resolve(&self, url: &str) -> Option<&RouteDefinition> {
        let path = url.split('?').next().unwrap_or(url).trim_start_matches('/');
        self.routes
            .iter()
            .find(|r| r.template.eq_ignore_ascii_case(path))
    }
}

impl RouteBuilder for RouteTable {
    fn map_route(&mut self, route: RouteDefinition) -> Result<()> {
        if self.find(&route.name).is_some() {
            return Err(RuleError::RoutingError {
                name: route.name,
                message: "a route with this name is already registered".to_string(),
            });
        }
        tracing::debug!("Mapped route {} -> {}", route.name, route.template);
        self.routes.push(route);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(name: &str, template: &str) -> RouteDefinition {
        RouteDefinition {
            name: name.to_string(),
            template: template.to_string(),
            controller: "Home".to_string(),
            action: "Index".to_string(),
        }
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut table = RouteTable::new();
        table.map_route(route("a", "A/Index")).unwrap();
        let err = table.map_route(route("a", "B/Index")).unwrap_err();
        assert!(matches!(err, RuleError::RoutingError { .. }));
        assert_eq!(table.routes().len(), 1);
    }

    #[test]
    fn test_resolve_ignores_query_and_leading_slash() {
        let mut table = RouteTable::new();
        table.map_route(route("a", "Plugins/A/Configure")).unwrap();
        assert!(table.resolve("/Plugins/A/Configure?discountId=1").is_some());
        assert!(table.resolve("Plugins/B/Configure").is_none());
    }
}
