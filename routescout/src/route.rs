//! Registered routes.

use std::sync::Arc;

use crate::ServiceScope;

/// A route registered in the host configuration.
#[derive(Debug)]
pub struct Route {
    /// The name the route was registered under.
    name: String,

    /// The route-level path prefix.
    prefix: String,

    /// The constraints the route resolves its service scope through.
    constraints: RouteConstraints,

    /// The service scope created for the route at registration.
    scope: Arc<ServiceScope>,
}

impl Route {
    pub(crate) fn new(
        name: String,
        prefix: String,
        constraints: RouteConstraints,
        scope: Arc<ServiceScope>,
    ) -> Self {
        Self {
            name,
            prefix,
            constraints,
            scope,
        }
    }

    /// Get the name the route was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the route-level path prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get the constraints the route resolves its service scope through.
    pub fn constraints(&self) -> &RouteConstraints {
        &self.constraints
    }

    /// Get the service scope created for the route at registration.
    pub fn scope(&self) -> &ServiceScope {
        &self.scope
    }
}

/// The constraints of a registered route.
///
/// The constraints carry the route name that scope resolution goes through. They normally name
/// the route they belong to; when they name anything else, the route's service scope cannot be
/// resolved from the configuration and execution-context synthesis fails for it.
#[derive(Debug, Clone)]
pub struct RouteConstraints {
    /// The name of the route the constraints resolve to.
    route_name: String,
}

impl RouteConstraints {
    /// Instantiate constraints resolving to the specified route name.
    pub fn new(route_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
        }
    }

    /// Get the name of the route the constraints resolve to.
    pub fn route_name(&self) -> &str {
        &self.route_name
    }
}
