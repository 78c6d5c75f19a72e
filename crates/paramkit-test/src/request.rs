//! Test request building.

use crate::error::TestError;
use http::{Method, Request, Uri};
use paramkit::{ParamContext, PathParams};

/// Builder for requests carrying router path bindings and a query string.
///
/// Query pairs added with [`query`](Self::query) are percent-encoded, so a
/// literal `+` in a value survives decoding. Use
/// [`raw_query`](Self::raw_query) to send text exactly as a client would.
///
/// # Example
///
/// ```
/// use paramkit_test::TestRequest;
///
/// let request = TestRequest::get("/users/42")
///     .path_param("id", "42")
///     .query("tag", "a b")
///     .query("tag", "c")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.uri().query(), Some("tag=a%20b&tag=c"));
/// assert_eq!(paramkit::path_u32(&request, "id").unwrap(), 42);
/// ```
#[must_use]
#[derive(Debug)]
pub struct TestRequest {
    method: Method,
    path: String,
    query: Vec<String>,
    path_params: PathParams,
}

impl TestRequest {
    /// Starts a GET request to `path`.
    pub fn get(path: impl AsRef<str>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Starts a request with the given method.
    pub fn new(method: Method, path: impl AsRef<str>) -> Self {
        Self {
            method,
            path: path.as_ref().to_string(),
            query: Vec::new(),
            path_params: PathParams::new(),
        }
    }

    /// Binds a path parameter, as a router would after matching.
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name, value);
        self
    }

    /// Appends a percent-encoded `key=value` pair to the query string.
    pub fn query(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.query.push(format!(
            "{}={}",
            urlencoding::encode(key.as_ref()),
            urlencoding::encode(value.as_ref())
        ));
        self
    }

    /// Appends raw query text without encoding it.
    pub fn raw_query(mut self, query: impl Into<String>) -> Self {
        self.query.push(query.into());
        self
    }

    fn uri(&self) -> Result<Uri, TestError> {
        let uri = if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.join("&"))
        };

        uri.parse()
            .map_err(|e| TestError::RequestBuild(format!("Invalid URI '{uri}': {e}")))
    }

    /// Builds an [`http::Request`] with a [`PathParams`] extension.
    pub fn build(self) -> Result<Request<()>, TestError> {
        let uri = self.uri()?;
        let mut request = Request::builder()
            .method(self.method)
            .uri(uri)
            .body(())
            .map_err(|e| TestError::RequestBuild(e.to_string()))?;

        request.extensions_mut().insert(self.path_params);
        Ok(request)
    }

    /// Builds a [`ParamContext`] instead of a full request.
    pub fn context(self) -> Result<ParamContext, TestError> {
        let uri = self.uri()?;
        Ok(ParamContext::new(self.method, uri, self.path_params))
    }
}
