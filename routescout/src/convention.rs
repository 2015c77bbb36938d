//! Routing conventions.

use std::{fmt, sync::Arc};

use crate::HandlerMetadata;

/// A routing convention attached to a route's service scope.
///
/// Most conventions resolve requests by naming patterns and expose no attribute mappings; the
/// default [`attribute_mappings`](Self::attribute_mappings) implementation returns `None` for
/// them. A convention that materializes attribute-declared routes overrides it to expose the
/// template-to-handler mappings it collected.
pub trait RoutingConvention: fmt::Debug + Send + Sync {
    /// Get the name of the convention.
    fn name(&self) -> &str;

    /// Get the attribute-declared template mappings, if this convention carries any.
    fn attribute_mappings(&self) -> Option<&[RouteTemplateMapping]> {
        None
    }
}

/// A mapping from a route-template fragment to the handler it routes to.
#[derive(Debug, Clone)]
pub struct RouteTemplateMapping {
    /// The route-template fragment, as declared on the handler.
    template: String,

    /// The handler the template routes to.
    handler: Arc<HandlerMetadata>,
}

impl RouteTemplateMapping {
    /// Instantiate a new mapping.
    pub fn new(template: impl Into<String>, handler: Arc<HandlerMetadata>) -> Self {
        Self {
            template: template.into(),
            handler,
        }
    }

    /// Get the route-template fragment.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Get the handler the template routes to.
    pub fn handler(&self) -> &Arc<HandlerMetadata> {
        &self.handler
    }
}

/// The attribute-routing convention.
///
/// Collects the template mappings materialized from route attributes and exposes them through
/// [`RoutingConvention::attribute_mappings`]. At most one instance may be registered per route.
#[derive(Debug, Default)]
pub struct AttributeRoutingConvention {
    mappings: Vec<RouteTemplateMapping>,
}

impl AttributeRoutingConvention {
    /// Instantiate a new, empty convention.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template mapping.
    ///
    /// Mappings keep their insertion order.
    pub fn with_mapping(mut self, mapping: RouteTemplateMapping) -> Self {
        self.mappings.push(mapping);

        self
    }
}

impl RoutingConvention for AttributeRoutingConvention {
    fn name(&self) -> &str {
        "attribute-routing"
    }

    fn attribute_mappings(&self) -> Option<&[RouteTemplateMapping]> {
        Some(&self.mappings)
    }
}
