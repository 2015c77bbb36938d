//! Run with
//!
//! ```not_rust
//! cargo run --example discover
//! ```

use std::sync::Arc;

use routescout::{
    AttributeRouteExplorer, AttributeRoutingConvention, DescriptorExplorer, HandlerMetadata,
    HostConfiguration, RouteRegistration, RouteTemplateMapping,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    info!("Starting example `{}`...", env!("CARGO_BIN_NAME"));

    // Describe the handlers the way route attributes would declare them.
    let get_products = Arc::new(
        HandlerMetadata::builder("Products", "Get")
            .with_template("Products")
            .with_method(http::Method::GET)
            .build()?,
    );

    let get_product_orders = Arc::new(
        HandlerMetadata::builder("Products", "GetOrders")
            .with_prefix("Products")
            .with_template("({key})/Orders")
            .with_method(http::Method::GET)
            .build()?,
    );

    let rate_product = Arc::new(
        HandlerMetadata::builder("Products", "Rate")
            .with_prefix("Products")
            .with_template("({key})/Default.Rate%20Product")
            .with_method(http::Method::POST)
            .build()?,
    );

    // Register a route carrying the attribute-routing convention, as a host would at startup.
    let configuration = Arc::new(
        HostConfiguration::builder()
            .with_route(
                RouteRegistration::new("odata")
                    .with_prefix("odata")
                    .with_convention(
                        AttributeRoutingConvention::new()
                            .with_mapping(RouteTemplateMapping::new("Products", get_products))
                            .with_mapping(RouteTemplateMapping::new(
                                "({key})/Orders",
                                get_product_orders,
                            ))
                            .with_mapping(RouteTemplateMapping::new(
                                "({key})/Default.Rate%20Product",
                                rate_product,
                            )),
                    ),
            )
            .build()?,
    );

    // Discover one action descriptor per attribute-declared route.
    for descriptor in AttributeRouteExplorer.explore(&configuration)? {
        println!(
            "{descriptor} ({}.{})",
            descriptor.handler().controller(),
            descriptor.handler().action(),
        );
    }

    Ok(())
}
