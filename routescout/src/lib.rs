//! Routescout
//!
//! Attribute-route discovery and path-template normalization for API documentation tooling.
//!
//! Given a host routing configuration, the [`AttributeRouteExplorer`] walks every registered
//! route, reads the attribute-declared template mappings off the route's service scope, and
//! produces one [`ActionDescriptor`] per mapping. Each descriptor carries the canonical
//! percent-decoded path template along with a synthetic [`ExecutionContext`] bound to the
//! handler's primary HTTP method.

pub mod template;

mod config;
mod context;
mod convention;
mod descriptor;
mod handler;
mod registry;
mod route;
mod scope;

pub use config::{
    BuildConfigurationError, HostConfiguration, HostConfigurationBuilder, RouteRegistration,
};
pub use context::{ExecutionContext, SynthesizeContextError};
pub use convention::{AttributeRoutingConvention, RouteTemplateMapping, RoutingConvention};
pub use descriptor::{ActionDescriptor, AttributeRouteExplorer, DescriptorExplorer, ExploreError};
pub use handler::{BuildHandlerMetadataError, HandlerMetadata, HandlerMetadataBuilder};
pub use registry::{ReadMappingsError, route_attribute_mappings};
pub use route::{Route, RouteConstraints};
pub use scope::ServiceScope;
