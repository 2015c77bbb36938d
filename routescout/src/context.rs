//! Synthetic execution contexts.

use std::sync::Arc;

use crate::{HandlerMetadata, HostConfiguration, Route, ServiceScope};

/// The placeholder request target bound to synthesized contexts.
///
/// Discovery happens without any real request, so the context carries a fixed, well-formed URI
/// in place of one.
const PLACEHOLDER_TARGET: &str = "http://any/";

/// A synthetic execution context for a discovered handler.
///
/// Documentation tooling inspects handlers as if a request were in flight. The context stands
/// in for that request: it binds the handler's primary HTTP method, a placeholder request
/// target, the host configuration, and the service scope resolved through the route's
/// constraints.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// The HTTP method bound to the context.
    method: http::Method,

    /// The placeholder request target.
    target: http::Uri,

    /// The host configuration the context was synthesized from.
    configuration: Arc<HostConfiguration>,

    /// The service scope of the handler's route.
    scope: Arc<ServiceScope>,
}

impl ExecutionContext {
    /// Synthesize an execution context for a handler discovered on a route.
    ///
    /// The context binds the handler's first declared HTTP method and the service scope
    /// resolved from the configuration through the route's constraints.
    pub fn synthesize(
        configuration: &Arc<HostConfiguration>,
        handler: &HandlerMetadata,
        route: &Route,
    ) -> Result<Self, SynthesizeContextError> {
        let route_name = route.constraints().route_name();

        let scope = configuration.service_scope(route_name).ok_or_else(|| {
            SynthesizeContextError::UnresolvableServiceScope {
                route_name: route_name.to_owned(),
            }
        })?;

        Ok(Self {
            method: handler.primary_method().clone(),
            target: http::Uri::from_static(PLACEHOLDER_TARGET),
            configuration: configuration.clone(),
            scope,
        })
    }

    /// Get the HTTP method bound to the context.
    pub fn method(&self) -> &http::Method {
        &self.method
    }

    /// Get the placeholder request target.
    pub fn target(&self) -> &http::Uri {
        &self.target
    }

    /// Get the host configuration the context was synthesized from.
    pub fn configuration(&self) -> &Arc<HostConfiguration> {
        &self.configuration
    }

    /// Get the service scope of the handler's route.
    pub fn scope(&self) -> &Arc<ServiceScope> {
        &self.scope
    }
}

/// An error that can occur when synthesizing an [`ExecutionContext`].
#[derive(Debug, thiserror::Error)]
pub enum SynthesizeContextError {
    /// The route's constraints name a route with no registered service scope.
    #[error(
        "no service scope is registered for route `{route_name}`: the route is not properly registered"
    )]
    UnresolvableServiceScope {
        /// The route name the constraints resolve to.
        route_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RouteConstraints, RouteRegistration};

    fn handler() -> HandlerMetadata {
        HandlerMetadata::builder("Products", "Patch")
            .with_template("({key})")
            .with_method(http::Method::PATCH)
            .with_method(http::Method::PUT)
            .build()
            .unwrap()
    }

    #[test]
    fn test_synthesize_binds_primary_method_and_scope() {
        let configuration = Arc::new(
            HostConfiguration::builder()
                .with_route(RouteRegistration::new("odata").with_prefix("odata"))
                .build()
                .unwrap(),
        );

        let context =
            ExecutionContext::synthesize(&configuration, &handler(), &configuration.routes()[0])
                .unwrap();

        assert_eq!(context.method(), &http::Method::PATCH);
        assert_eq!(context.target(), &http::Uri::from_static("http://any/"));
        assert_eq!(context.scope().route_name(), "odata");
        assert!(Arc::ptr_eq(context.configuration(), &configuration));
    }

    #[test]
    fn test_synthesize_fails_without_a_resolvable_scope() {
        let configuration = Arc::new(
            HostConfiguration::builder()
                .with_route(
                    RouteRegistration::new("odata")
                        .with_constraints(RouteConstraints::new("legacy")),
                )
                .build()
                .unwrap(),
        );

        let err =
            ExecutionContext::synthesize(&configuration, &handler(), &configuration.routes()[0])
                .unwrap_err();

        assert!(matches!(
            err,
            SynthesizeContextError::UnresolvableServiceScope { ref route_name }
                if route_name == "legacy"
        ));
    }
}
