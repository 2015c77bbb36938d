//! Attribute-mapping lookup.

use crate::{Route, RouteTemplateMapping};

/// Read the attribute-declared template mappings of a route.
///
/// At most one convention on the route's service scope may expose attribute mappings. A route
/// with none yields an empty slice; more than one is a configuration defect and yields
/// [`ReadMappingsError::AmbiguousConvention`].
pub fn route_attribute_mappings(
    route: &Route,
) -> Result<&[RouteTemplateMapping], ReadMappingsError> {
    let mut contributions = route
        .scope()
        .conventions()
        .iter()
        .filter_map(|convention| convention.attribute_mappings());

    let first = contributions.next();
    let second = contributions.next();

    match (first, second) {
        (None, _) => Ok(&[]),
        (Some(mappings), None) => Ok(mappings),
        (Some(_), Some(_)) => Err(ReadMappingsError::AmbiguousConvention {
            route_name: route.name().to_owned(),
            count: 2 + contributions.count(),
        }),
    }
}

/// An error that can occur when reading the attribute-declared template mappings of a route.
#[derive(Debug, thiserror::Error)]
pub enum ReadMappingsError {
    /// More than one convention on the route exposes attribute mappings.
    #[error("route `{route_name}` carries {count} attribute-routing conventions, expected at most one")]
    AmbiguousConvention {
        /// The name of the offending route.
        route_name: String,

        /// The number of conventions exposing attribute mappings.
        count: usize,
    },
}
