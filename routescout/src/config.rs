//! Host routing configuration.

use std::{collections::HashMap, sync::Arc};

use crate::{Route, RouteConstraints, RoutingConvention, ServiceScope};

/// The routing configuration of a host.
///
/// Holds every registered route, in registration order, along with the service scope created
/// for each registration. The configuration is immutable once built; construct it through
/// [`HostConfiguration::builder`].
#[derive(Debug)]
pub struct HostConfiguration {
    /// The registered routes, in registration order.
    routes: Vec<Arc<Route>>,

    /// The service scopes, indexed by the route name they were registered under.
    scopes: HashMap<String, Arc<ServiceScope>>,
}

impl HostConfiguration {
    /// Start building a host configuration.
    pub fn builder() -> HostConfigurationBuilder {
        HostConfigurationBuilder {
            registrations: Vec::new(),
        }
    }

    /// Get the registered routes, in registration order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Resolve the service scope registered under the specified route name.
    pub fn service_scope(&self, route_name: &str) -> Option<Arc<ServiceScope>> {
        self.scopes.get(route_name).cloned()
    }
}

/// A builder for [`HostConfiguration`].
#[derive(Debug)]
pub struct HostConfigurationBuilder {
    registrations: Vec<RouteRegistration>,
}

impl HostConfigurationBuilder {
    /// Add a route registration.
    pub fn with_route(mut self, registration: RouteRegistration) -> Self {
        self.registrations.push(registration);

        self
    }

    /// Build the host configuration.
    pub fn build(self) -> Result<HostConfiguration, BuildConfigurationError> {
        let mut routes = Vec::with_capacity(self.registrations.len());
        let mut scopes = HashMap::with_capacity(self.registrations.len());

        for registration in self.registrations {
            let RouteRegistration {
                name,
                prefix,
                constraints,
                conventions,
            } = registration;

            let scope = Arc::new(ServiceScope::new(name.clone(), conventions));

            if scopes.insert(name.clone(), scope.clone()).is_some() {
                return Err(BuildConfigurationError::DuplicateRouteName { name });
            }

            let constraints = constraints.unwrap_or_else(|| RouteConstraints::new(name.as_str()));

            routes.push(Arc::new(Route::new(name, prefix, constraints, scope)));
        }

        Ok(HostConfiguration { routes, scopes })
    }
}

/// An error that can occur when building a [`HostConfiguration`].
#[derive(Debug, thiserror::Error)]
pub enum BuildConfigurationError {
    /// Two route registrations carry the same name.
    #[error("a route named `{name}` is already registered")]
    DuplicateRouteName {
        /// The duplicated route name.
        name: String,
    },
}

/// A route registration, to be added to a [`HostConfigurationBuilder`].
#[derive(Debug)]
pub struct RouteRegistration {
    name: String,
    prefix: String,
    constraints: Option<RouteConstraints>,
    conventions: Vec<Arc<dyn RoutingConvention>>,
}

impl RouteRegistration {
    /// Instantiate a new registration for the specified route name.
    ///
    /// The prefix defaults to empty and the constraints default to resolving the registration's
    /// own name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: String::new(),
            constraints: None,
            conventions: Vec::new(),
        }
    }

    /// Set the route-level path prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();

        self
    }

    /// Override the route constraints.
    ///
    /// Constraints naming anything other than the registration's own name leave the route
    /// without a resolvable service scope, which fails execution-context synthesis for every
    /// handler discovered on the route.
    pub fn with_constraints(mut self, constraints: RouteConstraints) -> Self {
        self.constraints = Some(constraints);

        self
    }

    /// Register a routing convention on the route's service scope.
    ///
    /// Conventions keep their registration order.
    pub fn with_convention(mut self, convention: impl RoutingConvention + 'static) -> Self {
        self.conventions.push(Arc::new(convention));

        self
    }
}
