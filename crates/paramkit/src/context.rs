//! Owned snapshot of the request data the accessors need.
//!
//! [`ParamContext`] is useful when a handler has already split the request
//! apart, or when parameters have to outlive the request itself.

use crate::{ParamSource, PathParams};
use http::{Method, Request, Uri};

/// Method, URI and path bindings of a request.
///
/// # Example
///
/// ```rust
/// use paramkit::{ParamContext, PathParams};
/// use http::{Method, Uri};
///
/// let mut params = PathParams::new();
/// params.insert("id", "123");
///
/// let ctx = ParamContext::new(Method::GET, Uri::from_static("/users/123?full=true"), params);
///
/// assert_eq!(ctx.path(), "/users/123");
/// assert_eq!(paramkit::path_u32(&ctx, "id").unwrap(), 123);
/// assert!(paramkit::query_bool(&ctx, "full").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ParamContext {
    method: Method,
    uri: Uri,
    path_params: PathParams,
}

impl ParamContext {
    /// Creates a new context.
    #[must_use]
    pub fn new(method: Method, uri: Uri, path_params: PathParams) -> Self {
        Self {
            method,
            uri,
            path_params,
        }
    }

    /// Starts a [`ParamContextBuilder`].
    #[must_use]
    pub fn builder() -> ParamContextBuilder {
        ParamContextBuilder::new()
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URI.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the path portion of the URI.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Returns the path bindings.
    #[must_use]
    pub fn path_params(&self) -> &PathParams {
        &self.path_params
    }

    /// Returns a mutable reference to the path bindings.
    pub fn path_params_mut(&mut self) -> &mut PathParams {
        &mut self.path_params
    }
}

impl ParamSource for ParamContext {
    fn path_param(&self, key: &str) -> Option<&str> {
        self.path_params.get(key)
    }

    fn raw_query(&self) -> Option<&str> {
        self.uri.query()
    }
}

impl<B> From<&Request<B>> for ParamContext {
    fn from(request: &Request<B>) -> Self {
        Self {
            method: request.method().clone(),
            uri: request.uri().clone(),
            path_params: request
                .extensions()
                .get::<PathParams>()
                .cloned()
                .unwrap_or_default(),
        }
    }
}

/// Builder for [`ParamContext`].
///
/// Method defaults to `GET` and URI to `/`.
#[derive(Debug, Default)]
pub struct ParamContextBuilder {
    method: Option<Method>,
    uri: Option<Uri>,
    path_params: PathParams,
}

impl ParamContextBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the URI.
    #[must_use]
    pub fn uri(mut self, uri: Uri) -> Self {
        self.uri = Some(uri);
        self
    }

    /// Replaces all path bindings.
    #[must_use]
    pub fn path_params(mut self, params: PathParams) -> Self {
        self.path_params = params;
        self
    }

    /// Adds a single path binding.
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name, value);
        self
    }

    /// Builds the context.
    #[must_use]
    pub fn build(self) -> ParamContext {
        ParamContext {
            method: self.method.unwrap_or(Method::GET),
            uri: self.uri.unwrap_or_else(|| Uri::from_static("/")),
            path_params: self.path_params,
        }
    }
}
