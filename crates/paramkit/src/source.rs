//! Request handles the accessors read from.

use crate::PathParams;
use http::request::Parts;
use http::Request;

/// A request that exposes router path bindings and a raw query string.
///
/// Implemented for [`http::Request`] and [`http::request::Parts`], which
/// read path bindings from a [`PathParams`] request extension, and for
/// [`ParamContext`](crate::ParamContext).
///
/// # Example
///
/// ```rust
/// use paramkit::{ParamSource, PathParams};
///
/// let mut request = http::Request::builder()
///     .uri("/users/42?verbose=1")
///     .body(())
///     .unwrap();
/// request
///     .extensions_mut()
///     .insert([("id", "42")].into_iter().collect::<PathParams>());
///
/// assert_eq!(request.path_param("id"), Some("42"));
/// assert_eq!(request.raw_query(), Some("verbose=1"));
/// ```
pub trait ParamSource {
    /// Returns the value the router bound to `key`, if any.
    fn path_param(&self, key: &str) -> Option<&str>;

    /// Returns the undecoded query string, without the leading `?`.
    fn raw_query(&self) -> Option<&str>;
}

impl<B> ParamSource for Request<B> {
    fn path_param(&self, key: &str) -> Option<&str> {
        self.extensions()
            .get::<PathParams>()
            .and_then(|params| params.get(key))
    }

    fn raw_query(&self) -> Option<&str> {
        self.uri().query()
    }
}

impl ParamSource for Parts {
    fn path_param(&self, key: &str) -> Option<&str> {
        self.extensions
            .get::<PathParams>()
            .and_then(|params| params.get(key))
    }

    fn raw_query(&self) -> Option<&str> {
        self.uri.query()
    }
}

impl<S: ParamSource + ?Sized> ParamSource for &S {
    fn path_param(&self, key: &str) -> Option<&str> {
        (**self).path_param(key)
    }

    fn raw_query(&self) -> Option<&str> {
        (**self).raw_query()
    }
}
