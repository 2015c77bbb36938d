//! Action descriptors and their discovery.

use std::{fmt, sync::Arc};

use tracing::{debug, error, warn};

use crate::{
    ExecutionContext, HandlerMetadata, HostConfiguration, Route,
    registry::{self, ReadMappingsError},
    template,
};

/// A documentation-ready description of one attribute-declared route.
///
/// Binds the handler, the route it was discovered on, the canonical decoded path template, and
/// a synthetic execution context.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    /// The handler the descriptor describes.
    handler: Arc<HandlerMetadata>,

    /// The route the handler was discovered on.
    route: Arc<Route>,

    /// The canonical, percent-decoded path template.
    path_template: String,

    /// The synthetic execution context bound to the descriptor.
    context: ExecutionContext,
}

impl ActionDescriptor {
    /// Get the handler the descriptor describes.
    pub fn handler(&self) -> &Arc<HandlerMetadata> {
        &self.handler
    }

    /// Get the route the handler was discovered on.
    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    /// Get the canonical, percent-decoded path template.
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Get the synthetic execution context bound to the descriptor.
    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }
}

impl fmt::Display for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.context.method(), self.path_template)
    }
}

/// A discovery pass producing action descriptors from a host configuration.
///
/// # Example
///
/// ```rust,ignore
/// let configuration = Arc::new(
///     HostConfiguration::builder()
///         .with_route(
///             RouteRegistration::new("odata")
///                 .with_prefix("odata")
///                 .with_convention(attribute_convention),
///         )
///         .build()?,
/// );
///
/// for descriptor in AttributeRouteExplorer.explore(&configuration)? {
///     println!("{descriptor}");
/// }
/// ```
pub trait DescriptorExplorer {
    /// Discover the action descriptors of every route in the configuration.
    fn explore(
        &self,
        configuration: &Arc<HostConfiguration>,
    ) -> Result<Vec<ActionDescriptor>, ExploreError>;
}

/// An error that can occur when exploring a host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    /// A route's attribute mappings could not be read.
    #[error("failed to read attribute mappings: {0}")]
    ReadMappings(#[from] ReadMappingsError),
}

/// The attribute-route explorer.
///
/// Walks every registered route, reads the attribute-declared template mappings off its service
/// scope, and produces one [`ActionDescriptor`] per mapping whose handler declares a route
/// template. Handlers without one are skipped with a warning; a route whose execution context
/// cannot be synthesized is dropped entirely while discovery continues with the remaining
/// routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeRouteExplorer;

impl AttributeRouteExplorer {
    fn route_descriptors(
        configuration: &Arc<HostConfiguration>,
        route: &Arc<Route>,
    ) -> Result<Vec<ActionDescriptor>, ExploreError> {
        let mappings = registry::route_attribute_mappings(route)?;

        let mut descriptors = Vec::with_capacity(mappings.len());

        for mapping in mappings {
            let handler = mapping.handler();

            let Some(fragment) = handler.template() else {
                warn!(
                    "Handler `{}.{}` mapped to `{}` carries no route-template declaration; skipping it.",
                    handler.controller(),
                    handler.action(),
                    mapping.template(),
                );

                continue;
            };

            let path_template = template::canonicalize(route.prefix(), handler.prefix(), fragment);

            if path_template.is_empty() {
                warn!(
                    "Handler `{}.{}` resolves to an empty path template; skipping it.",
                    handler.controller(),
                    handler.action(),
                );

                continue;
            }

            match ExecutionContext::synthesize(configuration, handler, route) {
                Ok(context) => descriptors.push(ActionDescriptor {
                    handler: handler.clone(),
                    route: route.clone(),
                    path_template,
                    context,
                }),
                Err(err) => {
                    error!("Dropping route `{}` from discovery: {err}", route.name());

                    descriptors.clear();

                    break;
                }
            }
        }

        Ok(descriptors)
    }
}

impl DescriptorExplorer for AttributeRouteExplorer {
    fn explore(
        &self,
        configuration: &Arc<HostConfiguration>,
    ) -> Result<Vec<ActionDescriptor>, ExploreError> {
        let mut descriptors = Vec::new();

        for route in configuration.routes() {
            descriptors.extend(Self::route_descriptors(configuration, route)?);
        }

        debug!(
            "Resolved {} action descriptor(s) across {} route(s).",
            descriptors.len(),
            configuration.routes().len(),
        );

        Ok(descriptors)
    }
}
