//! End-to-end discovery of attribute-declared routes from a host configuration.

use std::sync::Arc;

use routescout::{
    AttributeRouteExplorer, AttributeRoutingConvention, DescriptorExplorer, ExploreError,
    HandlerMetadata, HostConfiguration, ReadMappingsError, RouteConstraints, RouteRegistration,
    RouteTemplateMapping, RoutingConvention,
};

#[derive(Debug)]
struct NamingConvention;

impl RoutingConvention for NamingConvention {
    fn name(&self) -> &str {
        "naming"
    }
}

fn handler(
    controller: &str,
    action: &str,
    prefix: Option<&str>,
    template: Option<&str>,
    methods: &[http::Method],
) -> Arc<HandlerMetadata> {
    let mut builder = HandlerMetadata::builder(controller, action);

    if let Some(prefix) = prefix {
        builder = builder.with_prefix(prefix);
    }

    if let Some(template) = template {
        builder = builder.with_template(template);
    }

    for method in methods {
        builder = builder.with_method(method.clone());
    }

    Arc::new(builder.build().unwrap())
}

fn mapping(template: &str, handler: Arc<HandlerMetadata>) -> RouteTemplateMapping {
    RouteTemplateMapping::new(template, handler)
}

#[test]
fn test_explore_resolves_canonical_templates_across_routes() {
    let configuration = Arc::new(
        HostConfiguration::builder()
            .with_route(
                RouteRegistration::new("odata")
                    .with_prefix("odata")
                    .with_convention(
                        AttributeRoutingConvention::new()
                            .with_mapping(mapping(
                                "Products",
                                handler(
                                    "Products",
                                    "Get",
                                    None,
                                    Some("Products"),
                                    &[http::Method::GET],
                                ),
                            ))
                            .with_mapping(mapping(
                                "({key})/Orders",
                                handler(
                                    "Products",
                                    "GetOrders",
                                    Some("Products"),
                                    Some("({key})/Orders"),
                                    &[http::Method::GET],
                                ),
                            )),
                    ),
            )
            .with_route(
                RouteRegistration::new("api")
                    .with_prefix("api/v2")
                    .with_convention(AttributeRoutingConvention::new().with_mapping(mapping(
                        "Suppliers",
                        handler(
                            "Suppliers",
                            "Post",
                            None,
                            Some("Suppliers"),
                            &[http::Method::POST],
                        ),
                    ))),
            )
            .build()
            .unwrap(),
    );

    let descriptors = AttributeRouteExplorer.explore(&configuration).unwrap();

    let templates: Vec<_> = descriptors
        .iter()
        .map(|descriptor| descriptor.path_template())
        .collect();

    assert_eq!(
        templates,
        [
            "odata/Products",
            "odata/Products({key})/Orders",
            "api/v2/Suppliers",
        ],
    );
    assert_eq!(descriptors[0].route().name(), "odata");
    assert_eq!(descriptors[2].route().name(), "api");
}

#[test]
fn test_explore_skips_handlers_without_a_template_declaration() {
    let configuration = Arc::new(
        HostConfiguration::builder()
            .with_route(
                RouteRegistration::new("odata")
                    .with_prefix("odata")
                    .with_convention(
                        AttributeRoutingConvention::new()
                            .with_mapping(mapping(
                                "Products",
                                handler("Products", "Get", None, None, &[http::Method::GET]),
                            ))
                            .with_mapping(mapping(
                                "Orders",
                                handler(
                                    "Orders",
                                    "Get",
                                    None,
                                    Some("Orders"),
                                    &[http::Method::GET],
                                ),
                            )),
                    ),
            )
            .build()
            .unwrap(),
    );

    let descriptors = AttributeRouteExplorer.explore(&configuration).unwrap();

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].path_template(), "odata/Orders");
}

#[test]
fn test_explore_fails_on_ambiguous_attribute_conventions() {
    let configuration = Arc::new(
        HostConfiguration::builder()
            .with_route(
                RouteRegistration::new("odata")
                    .with_convention(AttributeRoutingConvention::new())
                    .with_convention(AttributeRoutingConvention::new()),
            )
            .build()
            .unwrap(),
    );

    let err = AttributeRouteExplorer.explore(&configuration).unwrap_err();

    assert!(matches!(
        err,
        ExploreError::ReadMappings(ReadMappingsError::AmbiguousConvention {
            ref route_name,
            count: 2,
        }) if route_name == "odata"
    ));
}

#[test]
fn test_explore_drops_routes_without_a_resolvable_scope() {
    let configuration = Arc::new(
        HostConfiguration::builder()
            .with_route(
                RouteRegistration::new("broken")
                    .with_prefix("broken")
                    .with_constraints(RouteConstraints::new("missing"))
                    .with_convention(AttributeRoutingConvention::new().with_mapping(mapping(
                        "Products",
                        handler(
                            "Products",
                            "Get",
                            None,
                            Some("Products"),
                            &[http::Method::GET],
                        ),
                    ))),
            )
            .with_route(
                RouteRegistration::new("odata")
                    .with_prefix("odata")
                    .with_convention(AttributeRoutingConvention::new().with_mapping(mapping(
                        "Orders",
                        handler(
                            "Orders",
                            "Get",
                            None,
                            Some("Orders"),
                            &[http::Method::GET],
                        ),
                    ))),
            )
            .build()
            .unwrap(),
    );

    let descriptors = AttributeRouteExplorer.explore(&configuration).unwrap();

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].path_template(), "odata/Orders");
    assert_eq!(descriptors[0].route().name(), "odata");
}

#[test]
fn test_explore_decodes_percent_escapes_in_templates() {
    let configuration = Arc::new(
        HostConfiguration::builder()
            .with_route(
                RouteRegistration::new("odata")
                    .with_prefix("odata")
                    .with_convention(AttributeRoutingConvention::new().with_mapping(mapping(
                        "Default.Rate%20Product",
                        handler(
                            "Products",
                            "Rate",
                            Some("Products"),
                            Some("Default.Rate%20Product"),
                            &[http::Method::POST],
                        ),
                    ))),
            )
            .build()
            .unwrap(),
    );

    let descriptors = AttributeRouteExplorer.explore(&configuration).unwrap();

    assert_eq!(
        descriptors[0].path_template(),
        "odata/Products/Default.Rate Product",
    );
}

#[test]
fn test_explore_yields_nothing_for_conventionless_routes() {
    let configuration = Arc::new(
        HostConfiguration::builder()
            .with_route(RouteRegistration::new("odata").with_prefix("odata"))
            .with_route(RouteRegistration::new("naming").with_convention(NamingConvention))
            .build()
            .unwrap(),
    );

    let descriptors = AttributeRouteExplorer.explore(&configuration).unwrap();

    assert!(descriptors.is_empty());
}

#[test]
fn test_explore_binds_a_synthetic_execution_context() {
    let configuration = Arc::new(
        HostConfiguration::builder()
            .with_route(
                RouteRegistration::new("odata")
                    .with_prefix("odata")
                    .with_convention(AttributeRoutingConvention::new().with_mapping(mapping(
                        "Products({key})",
                        handler(
                            "Products",
                            "Update",
                            None,
                            Some("Products({key})"),
                            &[http::Method::PATCH, http::Method::PUT],
                        ),
                    ))),
            )
            .build()
            .unwrap(),
    );

    let descriptors = AttributeRouteExplorer.explore(&configuration).unwrap();
    let context = descriptors[0].context();

    assert_eq!(context.method(), &http::Method::PATCH);
    assert_eq!(context.target(), &http::Uri::from_static("http://any/"));
    assert_eq!(context.scope().route_name(), "odata");
    assert!(Arc::ptr_eq(context.configuration(), &configuration));
}
