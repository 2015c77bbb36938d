//! Per-route service scopes.

use std::sync::Arc;

use crate::RoutingConvention;

/// The service scope of a registered route.
///
/// Each route registration gets its own scope, holding the routing conventions registered for
/// that route. Scopes are resolved from the host configuration by route name; a route whose
/// constraints name a route that was never registered has no resolvable scope.
#[derive(Debug)]
pub struct ServiceScope {
    /// The name of the route the scope belongs to.
    route_name: String,

    /// The routing conventions registered for the route, in registration order.
    conventions: Vec<Arc<dyn RoutingConvention>>,
}

impl ServiceScope {
    pub(crate) fn new(route_name: String, conventions: Vec<Arc<dyn RoutingConvention>>) -> Self {
        Self {
            route_name,
            conventions,
        }
    }

    /// Get the name of the route the scope belongs to.
    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    /// Get the routing conventions registered for the route, in registration order.
    pub fn conventions(&self) -> &[Arc<dyn RoutingConvention>] {
        &self.conventions
    }
}
