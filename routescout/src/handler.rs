//! Handler metadata.

/// The attribute-declared metadata of a single handler method.
///
/// Carries everything discovery needs to know about the method: where it lives, which path
/// prefix and template fragment its attributes declare, and which HTTP methods it supports.
#[derive(Debug)]
pub struct HandlerMetadata {
    /// The name of the controller the handler belongs to.
    controller: String,

    /// The name of the handler method on the controller.
    action: String,

    /// The controller-level path prefix, if the controller declares one.
    prefix: Option<String>,

    /// The action-level route-template fragment, if the handler declares one.
    template: Option<String>,

    /// The HTTP methods the handler supports, in declaration order.
    methods: Vec<http::Method>,
}

impl HandlerMetadata {
    /// Start building handler metadata for the specified controller and action.
    pub fn builder(
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> HandlerMetadataBuilder {
        HandlerMetadataBuilder {
            controller: controller.into(),
            action: action.into(),
            prefix: None,
            template: None,
            methods: Vec::new(),
        }
    }

    /// Get the name of the controller the handler belongs to.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Get the name of the handler method.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Get the controller-level path prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Get the action-level route-template fragment, if any.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Get the HTTP methods the handler supports, in declaration order.
    pub fn methods(&self) -> &[http::Method] {
        &self.methods
    }

    /// Get the first declared HTTP method.
    pub fn primary_method(&self) -> &http::Method {
        self.methods
            .first()
            .expect("handler metadata declares at least one method")
    }
}

/// A builder for [`HandlerMetadata`].
#[derive(Debug)]
pub struct HandlerMetadataBuilder {
    controller: String,
    action: String,
    prefix: Option<String>,
    template: Option<String>,
    methods: Vec<http::Method>,
}

impl HandlerMetadataBuilder {
    /// Set the controller-level path prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());

        self
    }

    /// Set the action-level route-template fragment.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());

        self
    }

    /// Add a supported HTTP method.
    ///
    /// Methods keep their declaration order: the first one added becomes the
    /// [primary method](HandlerMetadata::primary_method).
    pub fn with_method(mut self, method: http::Method) -> Self {
        self.methods.push(method);

        self
    }

    /// Build the handler metadata.
    pub fn build(self) -> Result<HandlerMetadata, BuildHandlerMetadataError> {
        if self.methods.is_empty() {
            return Err(BuildHandlerMetadataError::NoSupportedMethod {
                controller: self.controller,
                action: self.action,
            });
        }

        Ok(HandlerMetadata {
            controller: self.controller,
            action: self.action,
            prefix: self.prefix,
            template: self.template,
            methods: self.methods,
        })
    }
}

/// An error that can occur when building [`HandlerMetadata`].
#[derive(Debug, thiserror::Error)]
pub enum BuildHandlerMetadataError {
    /// The handler declares no supported HTTP method.
    #[error("handler `{controller}.{action}` declares no supported HTTP method")]
    NoSupportedMethod {
        /// The name of the controller the handler belongs to.
        controller: String,

        /// The name of the handler method.
        action: String,
    },
}
